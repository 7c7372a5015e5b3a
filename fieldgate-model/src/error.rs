//! Error types shared by hosts and the allow-listing core.

use thiserror::Error;

/// Result type for document operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors a host can report while constructing or persisting documents.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Document not found.
    #[error("document not found: {0}")]
    NotFound(String),

    /// A field the schema requires is absent.
    #[error("missing required field '{field}' on model '{model}'")]
    MissingField { model: String, field: String },

    /// Rejected by a validator.
    #[error("validation failed for model '{model}': {message}")]
    Validation { model: String, message: String },

    /// Document belongs to a different model than the host.
    #[error("model mismatch: expected '{expected}', got '{actual}'")]
    ModelMismatch { expected: String, actual: String },
}
