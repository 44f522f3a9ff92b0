use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("No product ids left to assign")]
    IdExhausted,

    #[error("Failed to read catalog: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode catalog")]
    Encode(#[from] CodecError),

    #[error("Failed to persist catalog: {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
