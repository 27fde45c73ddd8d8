//! Cube dimension descriptor.
//!
//! Field order is part of the output contract: `name`, `description`, `sql`,
//! `type`, `primary_key`, `meta`. Empty descriptions and meta mappings are
//! omitted, and `primary_key` only ever appears as `true`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::column::Column;
use crate::enums::CanonicalType;
use crate::error::NormalizeError;
use crate::mappings::TypeMappings;
use crate::record::ColumnRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sql: String,
    #[serde(rename = "type")]
    pub dimension_type: CanonicalType,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Build dimensions for every column of a model.
///
/// Unlike [`Column::as_dimension`], this does not stop at the first
/// unmappable type: all failures are collected so a whole model can be
/// reported at once.
///
/// # Errors
///
/// Returns every [`NormalizeError`] encountered, in column order.
pub fn build_dimensions(
    model_name: &str,
    records: &[ColumnRecord],
    mappings: &TypeMappings,
) -> Result<Vec<Dimension>, Vec<NormalizeError>> {
    let mut dimensions = Vec::with_capacity(records.len());
    let mut errors = Vec::new();
    for record in records {
        match Column::new(model_name, record).as_dimension_with(mappings) {
            Ok(dimension) => dimensions.push(dimension),
            Err(error) => {
                warn!(model = model_name, column = %record.name, "{error}");
                errors.push(error);
            }
        }
    }
    if errors.is_empty() {
        Ok(dimensions)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_order() {
        let dimension = Dimension {
            name: "id".to_string(),
            description: Some("Order id".to_string()),
            sql: "id".to_string(),
            dimension_type: CanonicalType::Number,
            primary_key: true,
            meta: Some(Map::from_iter([("owner".to_string(), Value::from("ops"))])),
        };
        let json = serde_json::to_string(&dimension).unwrap();
        assert_eq!(
            json,
            r#"{"name":"id","description":"Order id","sql":"id","type":"number","primary_key":true,"meta":{"owner":"ops"}}"#
        );
    }

    #[test]
    fn test_primary_key_false_is_omitted() {
        let dimension = Dimension {
            name: "status".to_string(),
            description: None,
            sql: "status".to_string(),
            dimension_type: CanonicalType::String,
            primary_key: false,
            meta: None,
        };
        let json = serde_json::to_string(&dimension).unwrap();
        assert_eq!(json, r#"{"name":"status","sql":"status","type":"string"}"#);
    }

    #[test]
    fn test_build_dimensions_collects_all_errors() {
        let records = vec![
            ColumnRecord::new("id").with_data_type("int"),
            ColumnRecord::new("shape").with_data_type("polygon"),
            ColumnRecord::new("blob").with_data_type("blob(16)"),
        ];
        let errors = build_dimensions("orders", &records, &TypeMappings::new()).unwrap_err();
        let columns: Vec<_> = errors
            .iter()
            .map(|NormalizeError::UnmappableType { column, .. }| column.as_str())
            .collect();
        assert_eq!(columns, vec!["shape", "blob"]);
    }

    #[test]
    fn test_build_dimensions_keeps_column_order() {
        let records = vec![
            ColumnRecord::new("b").with_data_type("date"),
            ColumnRecord::new("a").with_data_type("bool"),
        ];
        let dimensions = build_dimensions("orders", &records, &TypeMappings::new()).unwrap();
        let names: Vec<_> = dimensions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(dimensions[0].dimension_type, CanonicalType::Time);
        assert_eq!(dimensions[1].dimension_type, CanonicalType::Boolean);
    }
}
