//! Normalization of data-model column metadata into Cube dimensions.
//!
//! ```
//! use cube_model::{CanonicalType, Column, ColumnRecord};
//!
//! let record = ColumnRecord::new("id")
//!     .with_data_type("NUMBER(38,0)")
//!     .with_tag("primary_key");
//! let column = Column::new("orders", &record);
//! assert_eq!(column.canonical_type().unwrap(), CanonicalType::Number);
//! assert!(column.as_dimension().unwrap().primary_key);
//! ```

pub mod column;
pub mod dimension;
pub mod enums;
pub mod error;
pub mod mappings;
pub mod record;

pub use column::Column;
pub use dimension::{Dimension, build_dimensions};
pub use enums::CanonicalType;
pub use error::{NormalizeError, Result};
pub use mappings::{TypeMappings, VENDOR_TYPE_MAPPINGS, clean_data_type, lookup_vendor_type};
pub use record::{ColumnRecord, PRIMARY_KEY_TAG};
