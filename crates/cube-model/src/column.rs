use std::fmt;

use serde_json::{Map, Value};

use crate::dimension::Dimension;
use crate::enums::CanonicalType;
use crate::error::{NormalizeError, Result};
use crate::mappings::TypeMappings;
use crate::record::{ColumnRecord, PRIMARY_KEY_TAG};

/// A column of a named model, borrowed from the registry's record.
#[derive(Clone, Copy)]
pub struct Column<'a> {
    model_name: &'a str,
    record: &'a ColumnRecord,
}

impl<'a> Column<'a> {
    pub fn new(model_name: &'a str, record: &'a ColumnRecord) -> Self {
        Self { model_name, record }
    }

    pub fn name(&self) -> &'a str {
        &self.record.name
    }

    /// Description, or `None` when absent or empty.
    pub fn description(&self) -> Option<&'a str> {
        self.record
            .description
            .as_deref()
            .filter(|description| !description.is_empty())
    }

    /// SQL expression for the dimension: the bare column identifier.
    pub fn sql(&self) -> &'a str {
        &self.record.name
    }

    /// Declared source type as written in the record.
    pub fn data_type(&self) -> Option<&'a str> {
        self.record.data_type.as_deref()
    }

    /// Meta mapping, or `None` when absent, null or empty.
    pub fn meta(&self) -> Option<&'a Map<String, Value>> {
        self.record.meta.as_ref().filter(|meta| !meta.is_empty())
    }

    /// Convention: a column tagged `primary_key` is the primary key dimension.
    pub fn primary_key(&self) -> bool {
        self.record.has_tag(PRIMARY_KEY_TAG)
    }

    /// Canonical dimension type using the built-in vendor table.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::UnmappableType`] when the declared type is
    /// neither a known vendor type nor a canonical type.
    pub fn canonical_type(&self) -> Result<CanonicalType> {
        self.canonical_type_with(&TypeMappings::default())
    }

    /// Canonical dimension type, consulting `mappings` overrides first.
    pub fn canonical_type_with(&self, mappings: &TypeMappings) -> Result<CanonicalType> {
        let Some(data_type) = self.data_type() else {
            return Ok(CanonicalType::default());
        };
        mappings
            .resolve(data_type)
            .ok_or_else(|| NormalizeError::UnmappableType {
                model: self.model_name.to_string(),
                column: self.name().to_string(),
                data_type: data_type.to_string(),
            })
    }

    /// Build the dimension descriptor for this column.
    pub fn as_dimension(&self) -> Result<Dimension> {
        self.as_dimension_with(&TypeMappings::default())
    }

    pub fn as_dimension_with(&self, mappings: &TypeMappings) -> Result<Dimension> {
        Ok(Dimension {
            name: self.name().to_string(),
            description: self.description().map(str::to_string),
            sql: self.sql().to_string(),
            dimension_type: self.canonical_type_with(mappings)?,
            primary_key: self.primary_key(),
            meta: self.meta().cloned(),
        })
    }
}

impl fmt::Debug for Column<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} {:?}", self.model_name, self.record.name, self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_type_defaults_to_string() {
        let record = ColumnRecord::new("notes");
        let column = Column::new("orders", &record);
        assert_eq!(column.canonical_type().unwrap(), CanonicalType::String);
    }

    #[test]
    fn test_empty_description_and_meta_are_none() {
        let record = ColumnRecord::new("id").with_description("");
        let column = Column::new("orders", &record);
        assert_eq!(column.description(), None);
        assert_eq!(column.meta(), None);
        assert!(!column.primary_key());
    }

    #[test]
    fn test_empty_meta_mapping_is_none() {
        let record: ColumnRecord =
            serde_json::from_str(r#"{"name": "id", "meta": {}}"#).unwrap();
        assert_eq!(Column::new("orders", &record).meta(), None);
    }

    #[test]
    fn test_unmappable_type_keeps_original_spelling() {
        let record = ColumnRecord::new("status").with_data_type("Frobnicate(12)");
        let column = Column::new("orders", &record);
        let err = column.canonical_type().unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnmappableType {
                model: "orders".to_string(),
                column: "status".to_string(),
                data_type: "Frobnicate(12)".to_string(),
            }
        );
    }

    #[test]
    fn test_sql_is_bare_identifier() {
        let record = ColumnRecord::new("created_at");
        let column = Column::new("orders", &record);
        assert_eq!(column.sql(), "created_at");
        assert_eq!(column.name(), column.sql());
    }
}
