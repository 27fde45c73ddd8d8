//! Column record files: a JSON object mapping model name to its columns.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use cube_model::ColumnRecord;

pub type ModelColumns = BTreeMap<String, Vec<ColumnRecord>>;

pub fn load_models(path: &Path) -> Result<ModelColumns> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read column file {}", path.display()))?;
    let models: ModelColumns = serde_json::from_str(&text)
        .with_context(|| format!("parse column file {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        models = models.len(),
        "loaded column records"
    );
    Ok(models)
}

/// Columns of one model, failing with the available model names.
pub fn model_columns<'a>(models: &'a ModelColumns, model: &str) -> Result<&'a [ColumnRecord]> {
    models.get(model).map(Vec::as_slice).ok_or_else(|| {
        let known: Vec<&str> = models.keys().map(String::as_str).collect();
        anyhow!("unknown model '{model}' (available: {})", known.join(", "))
    })
}
