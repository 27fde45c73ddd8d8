use cube_model::NormalizeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Type(#[from] NormalizeError),

    /// One or more columns of a model could not be normalized.
    #[error("{} column(s) with unknown types: {}", .0.len(), join_errors(.0))]
    Normalize(Vec<NormalizeError>),

    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn join_errors(errors: &[NormalizeError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, OutputError>;
