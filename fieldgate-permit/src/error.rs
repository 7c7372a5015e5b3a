//! Error types for option loading.
//!
//! Filtering never fails and persistence errors are the host's
//! [`ModelError`](fieldgate_model::ModelError), passed through untouched.

use thiserror::Error;

/// Result type for option loading.
pub type PermitResult<T> = Result<T, PermitError>;

#[derive(Debug, Error)]
pub enum PermitError {
    #[error("invalid TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),
}
