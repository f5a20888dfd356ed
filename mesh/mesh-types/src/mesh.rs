//! Indexed triangle mesh.

use crate::error::{TypesError, TypesResult};
use crate::{Aabb, MeshBounds, MeshTopology, Triangle, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Structure-of-arrays layout: a flat vertex buffer and a flat face buffer
/// whose entries reference vertices by index. There are no links between
/// faces; adjacency is derived on demand by the passes that need it.
///
/// # Winding Order
///
/// Face index order defines orientation: counter-clockwise when viewed from
/// outside, so normals point outward by the right-hand rule. Nothing here
/// enforces it; the topology validator reports violations.
///
/// # Index Invariant
///
/// Every face index must be `< vertices.len()`. The fields are public so
/// loaders can fill them directly; [`check_indices`](Self::check_indices)
/// verifies the invariant and every analysis entry point calls it.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex, MeshTopology};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// assert!(mesh.check_indices().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// Indices are not checked here; see [`check_indices`](Self::check_indices).
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from flat coordinate and index buffers.
    ///
    /// * `positions` - `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - `[a0, b0, c0, a1, b1, c1, ...]`
    ///
    /// Returns an empty mesh if either length is not a multiple of 3.
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, MeshTopology};
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let mesh = IndexedMesh::from_raw(&positions, &[0, 1, 2]);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Self { vertices, faces }
    }

    /// Verify that every face index is within the vertex buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::IndexOutOfBounds`] for the first offending face.
    pub fn check_indices(&self) -> TypesResult<()> {
        self.check_indices_named("mesh")
    }

    /// Same as [`check_indices`](Self::check_indices), naming the mesh in
    /// the error.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::IndexOutOfBounds`] for the first offending face.
    pub fn check_indices_named(&self, name: &str) -> TypesResult<()> {
        let vertex_count = self.vertices.len();
        for (face, indices) in self.faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(TypesError::IndexOutOfBounds {
                    mesh: name.to_string(),
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Append another mesh's buffers to this one.
    ///
    /// The other mesh's face indices are shifted by this mesh's current
    /// vertex count. Winding is preserved and coincident vertices are kept
    /// as-is: this is concatenation, not welding.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::IndexOutOfBounds`] if `other` has a face that
    /// references a missing vertex, or [`TypesError::TooManyVertices`] if the
    /// combined vertex buffer would not be addressable with `u32` indices.
    /// `self` is unchanged on error.
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, Vertex};
    ///
    /// let tri = IndexedMesh::from_parts(
    ///     vec![
    ///         Vertex::from_coords(0.0, 0.0, 0.0),
    ///         Vertex::from_coords(1.0, 0.0, 0.0),
    ///         Vertex::from_coords(0.0, 1.0, 0.0),
    ///     ],
    ///     vec![[0, 1, 2]],
    /// );
    ///
    /// let mut merged = tri.clone();
    /// merged.append(&tri).unwrap();
    /// assert_eq!(merged.faces[1], [3, 4, 5]);
    /// ```
    pub fn append(&mut self, other: &Self) -> TypesResult<()> {
        // Shifted indices must stay inside the appended block
        other.check_indices()?;
        let vertex_count = self.vertices.len() + other.vertices.len();
        if u32::try_from(vertex_count).is_err() {
            return Err(TypesError::TooManyVertices { vertex_count });
        }
        #[allow(clippy::cast_possible_truncation)]
        // Truncation: the combined count was just checked to fit in u32
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|&[a, b, c]| [a + offset, b + offset, c + offset]),
        );
        Ok(())
    }

    /// Iterate over all faces resolved to positions.
    ///
    /// # Panics
    ///
    /// Panics if a face references a missing vertex. Run
    /// [`check_indices`](Self::check_indices) first on untrusted input.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        let [i0, i1, i2] = *self.faces.get(face_index)?;
        Some(Triangle {
            v0: self.vertices.get(i0 as usize)?.position,
            v1: self.vertices.get(i1 as usize)?.position,
            v2: self.vertices.get(i2 as usize)?.position,
        })
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

/// Unit cube from (0,0,0) to (1,1,1), 8 vertices and 12 outward-wound
/// triangles.
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    let vertices = vec![
        Vertex::from_coords(0.0, 0.0, 0.0), // 0
        Vertex::from_coords(1.0, 0.0, 0.0), // 1
        Vertex::from_coords(1.0, 1.0, 0.0), // 2
        Vertex::from_coords(0.0, 1.0, 0.0), // 3
        Vertex::from_coords(0.0, 0.0, 1.0), // 4
        Vertex::from_coords(1.0, 0.0, 1.0), // 5
        Vertex::from_coords(1.0, 1.0, 1.0), // 6
        Vertex::from_coords(0.0, 1.0, 1.0), // 7
    ];

    let faces = vec![
        // Bottom (z=0), normal -Z
        [0, 2, 1],
        [0, 3, 2],
        // Top (z=1), normal +Z
        [4, 5, 6],
        [4, 6, 7],
        // Front (y=0), normal -Y
        [0, 1, 5],
        [0, 5, 4],
        // Back (y=1), normal +Y
        [3, 7, 6],
        [3, 6, 2],
        // Left (x=0), normal -X
        [0, 4, 7],
        [0, 7, 3],
        // Right (x=1), normal +X
        [1, 2, 6],
        [1, 6, 5],
    ];

    IndexedMesh::from_parts(vertices, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn triangle_at(x: f64) -> IndexedMesh {
        IndexedMesh::from_parts(
            vec![
                Vertex::from_coords(x, 0.0, 0.0),
                Vertex::from_coords(x + 1.0, 0.0, 0.0),
                Vertex::from_coords(x, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn mesh_is_empty() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());

        let mut mesh2 = IndexedMesh::new();
        mesh2.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        assert!(mesh2.is_empty()); // no faces

        mesh2.faces.push([0, 0, 0]);
        assert!(!mesh2.is_empty());
    }

    #[test]
    fn mesh_from_raw_rejects_ragged_buffers() {
        let mesh = IndexedMesh::from_raw(&[0.0, 1.0], &[0, 1, 2]);
        assert!(mesh.vertices.is_empty());
        assert!(mesh.faces.is_empty());
    }

    #[test]
    fn check_indices_reports_first_bad_face() {
        let mut mesh = triangle_at(0.0);
        mesh.faces.push([0, 1, 2]);
        mesh.faces.push([0, 7, 2]);
        mesh.faces.push([9, 1, 2]);

        let err = mesh.check_indices().unwrap_err();
        assert_eq!(
            err,
            TypesError::IndexOutOfBounds {
                mesh: "mesh".to_string(),
                face: 2,
                index: 7,
                vertex_count: 3,
            }
        );
    }

    #[test]
    fn check_indices_accepts_last_vertex() {
        let mesh = triangle_at(0.0);
        assert!(mesh.check_indices().is_ok());
        assert!(unit_cube().check_indices().is_ok());
    }

    #[test]
    fn append_offsets_indices() {
        let mut mesh = triangle_at(0.0);
        mesh.append(&triangle_at(2.0)).unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.faces[0], [0, 1, 2]);
        assert_eq!(mesh.faces[1], [3, 4, 5]);
        assert_eq!(mesh.vertices[3].position, Point3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn append_keeps_winding() {
        let mut flipped = triangle_at(0.0);
        flipped.faces[0] = [0, 2, 1];

        let mut mesh = triangle_at(5.0);
        mesh.append(&flipped).unwrap();
        assert_eq!(mesh.faces[1], [3, 5, 4]);
    }

    #[test]
    fn append_rejects_out_of_range_index() {
        let mut base = unit_cube();
        let mut other = unit_cube();
        other.faces.push([0, 1, u32::MAX]);

        let err = base.append(&other).unwrap_err();
        assert!(matches!(
            err,
            TypesError::IndexOutOfBounds {
                face: 12,
                index: u32::MAX,
                vertex_count: 8,
                ..
            }
        ));
        assert_eq!(base, unit_cube());
    }

    #[test]
    fn append_rejects_index_that_would_alias_previous_mesh() {
        let mut base = triangle_at(0.0);
        let mut other = triangle_at(2.0);
        other.faces[0] = [0, 1, 3];

        assert!(base.append(&other).is_err());
        assert_eq!(base.vertex_count(), 3);
        assert_eq!(base.face_count(), 1);
    }

    #[test]
    fn triangle_lookup_is_bounds_checked() {
        let mut mesh = triangle_at(0.0);
        mesh.faces.push([0, 1, 3]);

        assert!(mesh.triangle(0).is_some());
        assert!(mesh.triangle(1).is_none());
        assert!(mesh.triangle(2).is_none());
    }

    #[test]
    fn mesh_bounds() {
        let mesh = IndexedMesh::from_parts(
            vec![
                Vertex::from_coords(0.0, 0.0, 0.0),
                Vertex::from_coords(10.0, 5.0, 3.0),
                Vertex::from_coords(-2.0, 8.0, 1.0),
            ],
            vec![],
        );

        let bounds = mesh.bounds();
        assert_eq!(bounds.min, Point3::new(-2.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(10.0, 8.0, 3.0));
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        let mesh = IndexedMesh::new();
        assert!(mesh.bounds().is_empty());
    }

    #[test]
    fn unit_cube_triangles_cover_six_square_units() {
        let area: f64 = unit_cube().triangles().map(|t| t.area()).sum();
        assert!((area - 6.0).abs() < 1e-12);
    }
}
