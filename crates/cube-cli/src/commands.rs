use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use cube_model::{Column, NormalizeError, VENDOR_TYPE_MAPPINGS, build_dimensions};
use cube_output::{render_dimension_with, render_dimensions};

use crate::cli::{CheckArgs, DimensionsArgs, OutputFormatArg};
use crate::config::Config;
use crate::input::{load_models, model_columns};
use crate::summary::apply_table_style;

/// Normalization outcome for one model.
#[derive(Debug)]
pub struct ModelCheck {
    pub model: String,
    pub columns: usize,
    pub errors: Vec<NormalizeError>,
}

#[derive(Debug, Default)]
pub struct CheckResult {
    pub models: Vec<ModelCheck>,
}

impl CheckResult {
    pub fn error_count(&self) -> usize {
        self.models.iter().map(|m| m.errors.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Render the requested model (or column) and return the text to print.
pub fn run_dimensions(args: &DimensionsArgs, config: &Config) -> Result<String> {
    let models = load_models(&args.file)?;
    let records = model_columns(&models, &args.model)?;
    let indent = args.indent.unwrap_or(config.render.indent);
    let mappings = &config.type_mappings;
    let _span = info_span!("model", model = %args.model).entered();

    let records = match &args.column {
        Some(name) => {
            let record = records
                .iter()
                .find(|record| &record.name == name)
                .ok_or_else(|| anyhow!("model '{}' has no column '{name}'", args.model))?;
            std::slice::from_ref(record)
        }
        None => records,
    };
    debug!(columns = records.len(), indent, "rendering dimensions");

    let text = match (args.format, &args.column) {
        (OutputFormatArg::Yaml, Some(_)) => {
            render_dimension_with(&Column::new(&args.model, &records[0]), indent, mappings)?
        }
        (OutputFormatArg::Yaml, None) => {
            render_dimensions(&args.model, records, indent, mappings)?
        }
        (OutputFormatArg::Json, Some(_)) => {
            let dimension = Column::new(&args.model, &records[0]).as_dimension_with(mappings)?;
            serde_json::to_string_pretty(&dimension).context("serialize dimension")?
        }
        (OutputFormatArg::Json, None) => {
            let dimensions = build_dimensions(&args.model, records, mappings)
                .map_err(cube_output::OutputError::Normalize)?;
            serde_json::to_string_pretty(&dimensions).context("serialize dimensions")?
        }
    };
    Ok(text)
}

/// Normalize every column of every model, collecting all failures.
pub fn run_check(args: &CheckArgs, config: &Config) -> Result<CheckResult> {
    let models = load_models(&args.file)?;
    let mut result = CheckResult::default();
    for (model, records) in &models {
        let span = info_span!("model", model = %model);
        let _guard = span.enter();
        let errors = match build_dimensions(model, records, &config.type_mappings) {
            Ok(_) => Vec::new(),
            Err(errors) => errors,
        };
        info!(columns = records.len(), errors = errors.len(), "checked model");
        result.models.push(ModelCheck {
            model: model.clone(),
            columns: records.len(),
            errors,
        });
    }
    Ok(result)
}

/// Table of the built-in vendor types plus any configured overrides.
///
/// The source column only appears when overrides are configured.
pub fn types_table(config: &Config) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    if config.type_mappings.is_empty() {
        table.set_header(vec!["Vendor type", "Dimension type"]);
        for (vendor, canonical) in VENDOR_TYPE_MAPPINGS {
            table.add_row(vec![*vendor, canonical.as_str()]);
        }
        return table;
    }
    table.set_header(vec!["Vendor type", "Dimension type", "Source"]);
    for (vendor, canonical) in config.type_mappings.overrides() {
        table.add_row(vec![vendor, canonical.as_str(), "config"]);
    }
    for (vendor, canonical) in VENDOR_TYPE_MAPPINGS {
        table.add_row(vec![*vendor, canonical.as_str(), "built-in"]);
    }
    table
}
