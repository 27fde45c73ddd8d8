//! Vendor type vocabulary and its mapping onto Cube dimension types.
//!
//! Declared types are normalized before lookup: lower-cased, then a trailing
//! precision qualifier `(n)` and a trailing precision/scale qualifier
//! `(n, m)` are stripped. A cleaned type that is not in the table is tried
//! as a canonical type name, so `NUMBER(38, 0)` and `number` both resolve
//! to [`CanonicalType::Number`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::enums::CanonicalType;

/// Trailing precision qualifier, e.g. `timestamp(3)`.
static PRECISION_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d+\)$").expect("Invalid precision qualifier regex"));

/// Trailing precision/scale qualifier, e.g. `number(38, 0)`.
static PRECISION_SCALE_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\d+,\s*\d+\)$").expect("Invalid precision/scale qualifier regex")
});

/// Vendor type (lower-case, qualifiers stripped) to canonical type.
///
/// Canonical names are deliberately absent: they resolve through the
/// pass-through rule.
pub const VENDOR_TYPE_MAPPINGS: &[(&str, CanonicalType)] = &[
    ("bool", CanonicalType::Boolean),
    // Snowflake numeric
    ("decimal", CanonicalType::Number),
    ("numeric", CanonicalType::Number),
    ("int", CanonicalType::Number),
    ("integer", CanonicalType::Number),
    ("bigint", CanonicalType::Number),
    ("smallint", CanonicalType::Number),
    ("tinyint", CanonicalType::Number),
    ("byteint", CanonicalType::Number),
    ("float", CanonicalType::Number),
    ("float4", CanonicalType::Number),
    ("float8", CanonicalType::Number),
    ("double", CanonicalType::Number),
    ("double precision", CanonicalType::Number),
    ("real", CanonicalType::Number),
    // Snowflake string & binary
    ("varchar", CanonicalType::String),
    ("char", CanonicalType::String),
    ("character", CanonicalType::String),
    ("text", CanonicalType::String),
    ("binary", CanonicalType::String),
    ("varbinary", CanonicalType::String),
    // Snowflake date & time
    ("date", CanonicalType::Time),
    ("datetime", CanonicalType::Time),
    ("timestamp", CanonicalType::Time),
    ("timestamp_ltz", CanonicalType::Time),
    ("timestamp_ntz", CanonicalType::Time),
    ("timestamp_tz", CanonicalType::Time),
    // Snowflake semi-structured
    ("variant", CanonicalType::String),
    ("object", CanonicalType::String),
    ("array", CanonicalType::String),
    // Snowflake geospatial
    ("geography", CanonicalType::Geo),
    ("geometry", CanonicalType::String),
    // Snowflake vector
    ("vector", CanonicalType::String),
];

/// Lower-case a declared type and strip its precision/scale qualifiers.
///
/// Both qualifier rules run unconditionally, precision first.
pub fn clean_data_type(data_type: &str) -> String {
    let lowered = data_type.to_lowercase();
    let without_precision = PRECISION_QUALIFIER.replace(&lowered, "");
    PRECISION_SCALE_QUALIFIER
        .replace(&without_precision, "")
        .into_owned()
}

/// Look up an already-cleaned vendor type in the static table.
pub fn lookup_vendor_type(cleaned: &str) -> Option<CanonicalType> {
    VENDOR_TYPE_MAPPINGS
        .iter()
        .find(|(vendor, _)| *vendor == cleaned)
        .map(|(_, canonical)| *canonical)
}

/// Vendor type mappings with optional user overrides.
///
/// Overrides are consulted before [`VENDOR_TYPE_MAPPINGS`]; keys are stored
/// in cleaned form so `HUGEINT` and `hugeint(10)` hit the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMappings {
    overrides: BTreeMap<String, CanonicalType>,
}

impl TypeMappings {
    /// Creates mappings backed only by the static table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an override.
    #[must_use]
    pub fn with_override(mut self, vendor: &str, canonical: CanonicalType) -> Self {
        self.insert(vendor, canonical);
        self
    }

    pub fn insert(&mut self, vendor: &str, canonical: CanonicalType) {
        self.overrides.insert(clean_data_type(vendor), canonical);
    }

    pub fn overrides(&self) -> impl Iterator<Item = (&str, CanonicalType)> {
        self.overrides
            .iter()
            .map(|(vendor, canonical)| (vendor.as_str(), *canonical))
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Resolve a declared type to its canonical type.
    ///
    /// Returns `None` when the cleaned type is unknown; callers attach the
    /// column context to the error.
    pub fn resolve(&self, data_type: &str) -> Option<CanonicalType> {
        let cleaned = clean_data_type(data_type);
        if let Some(canonical) = self.overrides.get(&cleaned) {
            debug!(data_type, %canonical, "resolved declared type via override");
            return Some(*canonical);
        }
        if let Some(canonical) = lookup_vendor_type(&cleaned) {
            return Some(canonical);
        }
        let passthrough = cleaned.parse::<CanonicalType>().ok();
        if passthrough.is_some() {
            debug!(data_type, "declared type is already a dimension type");
        }
        passthrough
    }
}
