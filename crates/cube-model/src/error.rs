use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The declared type is neither a known vendor type nor a canonical type.
    #[error("unknown column type of {model}.{column}: {data_type}")]
    UnmappableType {
        model: String,
        column: String,
        /// Declared type exactly as it appeared in the record.
        data_type: String,
    },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
