//! Volume, surface area and triangle count.

use mesh_types::IndexedMesh;
use tracing::debug;

use crate::bounds::{bounding_box, BoundingBox};
use crate::error::MeasureResult;

/// Geometric metrics of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshMetrics {
    /// Signed volume from the divergence theorem.
    ///
    /// Equals the enclosed volume for a closed, outward-wound mesh. Inward
    /// or mixed winding biases it (possibly negative); no correction is
    /// applied, the topology validator reports the winding instead.
    pub volume: f64,

    /// Sum of face areas. Never negative.
    pub surface_area: f64,

    /// Bounding box of the vertex buffer.
    pub bounds: BoundingBox,

    /// Number of faces.
    pub triangle_count: usize,
}

/// Compute all metrics of a mesh.
///
/// One pass over the faces accumulates volume and area; one pass over the
/// vertices yields the bounding box. The face pass runs sequentially so the
/// floating-point summation order, and with it the result, is identical on
/// every call.
///
/// # Errors
///
/// - [`MeasureError::InvalidMesh`](crate::MeasureError::InvalidMesh) if a
///   face references a missing vertex.
/// - [`MeasureError::EmptyMesh`](crate::MeasureError::EmptyMesh) if there
///   are no vertices.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_measure::compute_metrics;
///
/// let metrics = compute_metrics(&unit_cube()).unwrap();
/// assert!((metrics.volume - 1.0).abs() < 1e-9);
/// assert!((metrics.surface_area - 6.0).abs() < 1e-9);
/// assert_eq!(metrics.triangle_count, 12);
/// ```
pub fn compute_metrics(mesh: &IndexedMesh) -> MeasureResult<MeshMetrics> {
    mesh.check_indices()?;
    let bounds = bounding_box(mesh)?;

    let (volume, surface_area) = mesh
        .triangles()
        .fold((0.0, 0.0), |(volume, area), tri| {
            (volume + tri.signed_volume(), area + tri.area())
        });

    debug!(
        faces = mesh.faces.len(),
        volume, surface_area, "computed mesh metrics"
    );

    Ok(MeshMetrics {
        volume,
        surface_area,
        bounds,
        triangle_count: mesh.faces.len(),
    })
}

/// Signed volume of a mesh (see [`MeshMetrics::volume`]).
///
/// Zero for a mesh with no faces.
///
/// # Errors
///
/// Returns [`MeasureError::InvalidMesh`](crate::MeasureError::InvalidMesh)
/// if a face references a missing vertex.
pub fn signed_volume(mesh: &IndexedMesh) -> MeasureResult<f64> {
    mesh.check_indices()?;
    Ok(mesh.triangles().map(|tri| tri.signed_volume()).sum())
}

/// Total surface area of a mesh.
///
/// Zero for a mesh with no faces.
///
/// # Errors
///
/// Returns [`MeasureError::InvalidMesh`](crate::MeasureError::InvalidMesh)
/// if a face references a missing vertex.
pub fn surface_area(mesh: &IndexedMesh) -> MeasureResult<f64> {
    mesh.check_indices()?;
    Ok(mesh.triangles().map(|tri| tri.area()).sum())
}
