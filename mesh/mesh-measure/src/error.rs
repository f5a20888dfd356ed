//! Error types for measurement operations.

use mesh_types::TypesError;
use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during measurement operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// Input mesh has no vertices, so it has no bounding box.
    #[error("input mesh has no vertices")]
    EmptyMesh,

    /// Input mesh violates the index invariant.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] TypesError),
}

impl MeasureError {
    /// Create an empty mesh error.
    #[must_use]
    pub const fn empty_mesh() -> Self {
        Self::EmptyMesh
    }
}
