//! Read-only views the analysis crates work through.

use crate::{Aabb, Triangle};

/// Counts and resolved faces of a mesh.
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of triangular faces.
    fn face_count(&self) -> usize;

    /// Nothing to measure: no vertices or no faces.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Face `face_index` resolved to positions.
    ///
    /// `None` if the face, or a vertex it references, does not exist.
    fn triangle(&self, face_index: usize) -> Option<Triangle>;
}

/// Meshes that can report their vertex bounds.
pub trait MeshBounds {
    /// Bounds of all vertices; [empty](Aabb::is_empty) if there are none.
    fn bounds(&self) -> Aabb;
}
