//! Text rendering of Cube dimensions.
//!
//! Output is block YAML meant to be pasted into a larger generated document
//! at the caller's cursor position. The first line is left unindented;
//! every following line is indented by `indent` spaces so nested keys line
//! up under the first one.
//!
//! ```text
//! dimensions:
//!   - {{ column.as_dimension() }}
//! ```

pub mod error;

use cube_model::{Column, ColumnRecord, TypeMappings, build_dimensions};
use serde::Serialize;

pub use error::{OutputError, Result};

/// Indentation used by Cube model templates for a dimension list entry.
pub const DEFAULT_INDENT: usize = 8;

/// Serialize any value to YAML, indenting continuation lines.
pub fn dump<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String> {
    let yaml = serde_yaml::to_string(value)?;
    Ok(indent_continuation(yaml.trim_end_matches('\n'), indent))
}

/// Render one column's dimension descriptor.
///
/// # Errors
///
/// Fails when the column's declared type cannot be normalized.
pub fn render_dimension(column: &Column<'_>, indent: usize) -> Result<String> {
    render_dimension_with(column, indent, &TypeMappings::default())
}

pub fn render_dimension_with(
    column: &Column<'_>,
    indent: usize,
    mappings: &TypeMappings,
) -> Result<String> {
    let dimension = column.as_dimension_with(mappings)?;
    dump(&dimension, indent)
}

/// Render every column of a model as a YAML sequence of dimensions.
///
/// All unmappable columns are reported together.
pub fn render_dimensions(
    model_name: &str,
    records: &[ColumnRecord],
    indent: usize,
    mappings: &TypeMappings,
) -> Result<String> {
    let dimensions =
        build_dimensions(model_name, records, mappings).map_err(OutputError::Normalize)?;
    dump(&dimensions, indent)
}

fn indent_continuation(text: &str, indent: usize) -> String {
    let padding = " ".repeat(indent);
    let mut out = String::with_capacity(text.len());
    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&padding);
            }
        }
        out.push_str(line);
    }
    out
}
