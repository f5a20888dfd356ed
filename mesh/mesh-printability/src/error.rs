//! Error types for printability analysis.

use mesh_types::TypesError;
use thiserror::Error;

/// Result type for printability operations.
pub type PrintabilityResult<T> = Result<T, PrintabilityError>;

/// Errors that can occur during printability analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintabilityError {
    /// Mesh violates the index invariant.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] TypesError),

    /// Invalid configuration parameter.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },
}

impl PrintabilityError {
    /// Create an `InvalidConfig` error with the given message.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
