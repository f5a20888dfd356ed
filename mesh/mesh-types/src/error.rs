//! Error types for mesh construction and scene normalization.

use thiserror::Error;

/// Result type for mesh-types operations.
pub type TypesResult<T> = Result<T, TypesError>;

/// Errors raised while building or normalizing meshes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Scene contains no sub-meshes.
    #[error("scene contains no meshes")]
    EmptyScene,

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but {mesh} has only {vertex_count} vertices")]
    IndexOutOfBounds {
        /// Name of the mesh or sub-mesh holding the face.
        mesh: String,
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices available.
        vertex_count: usize,
    },

    /// Combined vertex count no longer fits a `u32` face index.
    #[error("combined mesh would have {vertex_count} vertices, exceeding the u32 index range")]
    TooManyVertices {
        /// Vertex count that would have resulted.
        vertex_count: usize,
    },
}
