//! Error types for queryflow-rs

use thiserror::Error;

/// Result type alias for queryflow operations
pub type Result<T> = std::result::Result<T, QueryFlowError>;

/// QueryFlow error types
#[derive(Error, Debug)]
pub enum QueryFlowError {
    /// Record lookup by id failed
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Upload rejected before a record was created
    #[error("Validation failed: {0}")]
    Validation(#[from] UploadRejection),

    /// Retryable backend failure (never raised by the mock services)
    #[error("Transient failure: {0}")]
    Transient(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fixture data could not be loaded
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QueryFlowError {
    /// Whether the caller may retry the same operation
    pub fn is_retryable(&self) -> bool {
        matches!(self, QueryFlowError::Transient(_))
    }
}

/// Reasons an uploaded file is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("File {filename} is too large ({size} bytes). Maximum size is {limit} bytes.")]
    TooLarge {
        filename: String,
        size: u64,
        limit: u64,
    },

    #[error("File type {extension} is not supported ({filename})")]
    UnsupportedType { filename: String, extension: String },
}
