//! Engine error taxonomy.
//!
//! Every variant is a client-input error: retrying the same request cannot
//! succeed.

use mesh_measure::MeasureError;
use mesh_printability::PrintabilityError;
use mesh_types::TypesError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the analysis and validation entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Source file extension is outside the operation's allow-list.
    #[error("Unsupported file type. Allowed: {allowed}")]
    UnsupportedFormat {
        /// Lowercased extension with its leading dot, empty if none.
        extension: String,
        /// Comma-separated allowed extensions.
        allowed: String,
    },

    /// Scene has no sub-meshes.
    #[error("Empty model")]
    EmptyModel,

    /// Normalized mesh has nothing to measure.
    #[error("model has no usable geometry ({vertex_count} vertices, {face_count} faces)")]
    UnsupportedGeometry {
        /// Vertices after normalization.
        vertex_count: usize,
        /// Faces after normalization.
        face_count: usize,
    },

    /// A face references a missing vertex, or buffers cannot be combined.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(TypesError),

    /// Scene exceeds the configured face-count ceiling.
    #[error("model has {face_count} faces, exceeding the limit of {limit}")]
    CapacityExceeded {
        /// Faces in the scene.
        face_count: usize,
        /// Configured ceiling.
        limit: usize,
    },

    /// Engine configuration is unusable.
    #[error("invalid engine configuration: {message}")]
    InvalidConfig {
        /// What is wrong.
        message: String,
    },
}

impl EngineError {
    /// Create an `InvalidConfig` error with the given message.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Stable identifier for outer surfaces (HTTP bodies, exit reports).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::EmptyModel => "empty_model",
            Self::UnsupportedGeometry { .. } => "unsupported_geometry",
            Self::MalformedGeometry(_) => "malformed_geometry",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::InvalidConfig { .. } => "invalid_config",
        }
    }
}

impl From<TypesError> for EngineError {
    fn from(err: TypesError) -> Self {
        match err {
            TypesError::EmptyScene => Self::EmptyModel,
            other => Self::MalformedGeometry(other),
        }
    }
}

impl From<MeasureError> for EngineError {
    fn from(err: MeasureError) -> Self {
        match err {
            MeasureError::EmptyMesh => Self::UnsupportedGeometry {
                vertex_count: 0,
                face_count: 0,
            },
            MeasureError::InvalidMesh(inner) => inner.into(),
        }
    }
}

impl From<PrintabilityError> for EngineError {
    fn from(err: PrintabilityError) -> Self {
        match err {
            PrintabilityError::InvalidMesh(inner) => inner.into(),
            PrintabilityError::InvalidConfig { message } => Self::InvalidConfig { message },
        }
    }
}
