//! Type-safe enumerations for Cube dimension metadata.
//!
//! # Cube Reference
//!
//! - Dimension types: <https://cube.dev/docs/reference/data-model/types-and-formats#dimension-types>

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimension type accepted by the Cube semantic layer.
///
/// This is a closed set: every declared column type is either mapped onto one
/// of these or rejected.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalType {
    Boolean,
    /// Geographic point or shape.
    Geo,
    Number,
    /// Also the type of columns without a declared type.
    #[default]
    String,
    /// Dates, datetimes and timestamps of any precision or timezone handling.
    Time,
}

impl CanonicalType {
    /// All canonical types, in alphabetical order.
    pub const ALL: [CanonicalType; 5] = [
        CanonicalType::Boolean,
        CanonicalType::Geo,
        CanonicalType::Number,
        CanonicalType::String,
        CanonicalType::Time,
    ];

    /// Returns the name as it appears in a Cube data model.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalType::Boolean => "boolean",
            CanonicalType::Geo => "geo",
            CanonicalType::Number => "number",
            CanonicalType::String => "string",
            CanonicalType::Time => "time",
        }
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CanonicalType {
    type Err = String;

    /// Parse an exact, lower-case canonical type name.
    ///
    /// Unlike the vendor-type lookup this does no case folding; callers
    /// normalize first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" => Ok(CanonicalType::Boolean),
            "geo" => Ok(CanonicalType::Geo),
            "number" => Ok(CanonicalType::Number),
            "string" => Ok(CanonicalType::String),
            "time" => Ok(CanonicalType::Time),
            _ => Err(format!("Unknown dimension type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_type_from_str() {
        for ty in CanonicalType::ALL {
            assert_eq!(ty.as_str().parse::<CanonicalType>().unwrap(), ty);
        }
        assert!("Number".parse::<CanonicalType>().is_err());
        assert!("varchar".parse::<CanonicalType>().is_err());
    }

    #[test]
    fn test_canonical_type_serde() {
        let json = serde_json::to_string(&CanonicalType::Time).unwrap();
        assert_eq!(json, "\"time\"");
        let parsed: CanonicalType = serde_json::from_str("\"geo\"").unwrap();
        assert_eq!(parsed, CanonicalType::Geo);
    }

    #[test]
    fn test_default_is_string() {
        assert_eq!(CanonicalType::default(), CanonicalType::String);
    }
}
