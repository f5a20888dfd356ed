//! Axis-aligned bounding box with derived extents.

use mesh_types::{Aabb, IndexedMesh, Point3, Vector3};
use rayon::prelude::*;

use crate::error::{MeasureError, MeasureResult};

/// Bounding box of a mesh's vertex buffer.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_measure::bounding_box;
///
/// let bbox = bounding_box(&unit_cube()).unwrap();
/// assert_eq!(bbox.min_array(), [0.0, 0.0, 0.0]);
/// assert_eq!(bbox.dimensions_array(), [1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Component-wise minimum over all vertices.
    pub min: Point3<f64>,
    /// Component-wise maximum over all vertices.
    pub max: Point3<f64>,
    /// Per-axis extents, `max - min`.
    pub dimensions: Vector3<f64>,
}

impl BoundingBox {
    /// Build from a non-empty [`Aabb`].
    ///
    /// Returns `None` for an empty (inverted) box.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb) -> Option<Self> {
        if aabb.is_empty() {
            return None;
        }
        Some(Self {
            min: aabb.min,
            max: aabb.max,
            dimensions: aabb.size(),
        })
    }

    /// Minimum corner as `[x, y, z]`.
    #[must_use]
    pub fn min_array(&self) -> [f64; 3] {
        [self.min.x, self.min.y, self.min.z]
    }

    /// Maximum corner as `[x, y, z]`.
    #[must_use]
    pub fn max_array(&self) -> [f64; 3] {
        [self.max.x, self.max.y, self.max.z]
    }

    /// Extents as `[dx, dy, dz]`.
    #[must_use]
    pub fn dimensions_array(&self) -> [f64; 3] {
        [self.dimensions.x, self.dimensions.y, self.dimensions.z]
    }

    /// Longest extent.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.dimensions.x.max(self.dimensions.y).max(self.dimensions.z)
    }
}

/// Compute the bounding box of a mesh.
///
/// A min/max reduction over the vertex buffer. It is order-independent,
/// so the vertices are reduced in parallel without affecting the result.
/// Unreferenced vertices count.
///
/// # Errors
///
/// Returns [`MeasureError::EmptyMesh`] if the mesh has no vertices.
pub fn bounding_box(mesh: &IndexedMesh) -> MeasureResult<BoundingBox> {
    let aabb = mesh
        .vertices
        .par_iter()
        .fold(Aabb::empty, |mut acc, v| {
            acc.expand_to_include(&v.position);
            acc
        })
        .reduce(Aabb::empty, |a, b| a.union(&b));

    BoundingBox::from_aabb(&aabb).ok_or(MeasureError::EmptyMesh)
}
