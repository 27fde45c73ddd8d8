//! Raw column metadata as supplied by the model registry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tag marking a column as the model's primary key dimension.
pub const PRIMARY_KEY_TAG: &str = "primary_key";

/// Metadata for one column of a data model.
///
/// Only `name` is required; every other field falls back to its empty form
/// when absent from the source document. An explicit `null` data type is
/// equivalent to an absent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Declared source type, e.g. `NUMBER(38,0)` or `TIMESTAMP_NTZ`.
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form metadata, passed through to the dimension untouched.
    /// An explicit `null` is equivalent to an absent mapping.
    #[serde(default)]
    pub meta: Option<Map<String, Value>>,
}

impl ColumnRecord {
    /// Creates a record with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            data_type: None,
            tags: Vec::new(),
            meta: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
