//! Scenes of independent sub-meshes and their normalization into one mesh.

use tracing::debug;

use crate::error::{TypesError, TypesResult};
use crate::IndexedMesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named sub-mesh as decoded from a source file.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubMesh {
    /// Name from the source file (may be empty).
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// The sub-mesh geometry.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub mesh: IndexedMesh,
}

impl SubMesh {
    /// Create a named sub-mesh.
    #[must_use]
    pub fn new(name: impl Into<String>, mesh: IndexedMesh) -> Self {
        Self {
            name: name.into(),
            mesh,
        }
    }
}

/// Zero or more sub-meshes with no implied relationship between them.
///
/// This is what a format loader produces: a single-body STL decodes to one
/// sub-mesh, a glTF with several nodes to many. Analysis always runs on the
/// [normalized](normalize) mesh.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology, Scene};
///
/// let mut scene = Scene::new();
/// scene.push("left", unit_cube());
/// scene.push("right", unit_cube());
///
/// let mesh = scene.normalize().unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.face_count(), 24);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    /// Sub-meshes in source order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub meshes: Vec<SubMesh>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub const fn new() -> Self {
        Self { meshes: Vec::new() }
    }

    /// Scene holding a single unnamed mesh.
    #[must_use]
    pub fn single(mesh: IndexedMesh) -> Self {
        Self {
            meshes: vec![SubMesh::new("", mesh)],
        }
    }

    /// Append a named sub-mesh.
    pub fn push(&mut self, name: impl Into<String>, mesh: IndexedMesh) {
        self.meshes.push(SubMesh::new(name, mesh));
    }

    /// Check if the scene has no sub-meshes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Total vertex count across sub-meshes.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(|m| m.mesh.vertices.len()).sum()
    }

    /// Total face count across sub-meshes.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.meshes.iter().map(|m| m.mesh.faces.len()).sum()
    }

    /// Merge all sub-meshes into one mesh. See [`normalize`].
    ///
    /// # Errors
    ///
    /// See [`normalize`].
    pub fn normalize(&self) -> TypesResult<IndexedMesh> {
        normalize(self)
    }
}

impl From<IndexedMesh> for Scene {
    fn from(mesh: IndexedMesh) -> Self {
        Self::single(mesh)
    }
}

impl FromIterator<SubMesh> for Scene {
    fn from_iter<I: IntoIterator<Item = SubMesh>>(iter: I) -> Self {
        Self {
            meshes: iter.into_iter().collect(),
        }
    }
}

/// Concatenate a scene's sub-meshes into one mesh.
///
/// Vertex buffers are appended in scene order. Each face is shifted by the
/// number of vertices appended before its sub-mesh, exactly once. Windings
/// are preserved and coincident vertices across sub-meshes are not welded.
///
/// # Errors
///
/// - [`TypesError::EmptyScene`] if the scene has no sub-meshes.
/// - [`TypesError::IndexOutOfBounds`] if a face references a vertex outside
///   its own sub-mesh. Indices are checked before offsetting, so a bad index
///   can never silently land on a neighbour's vertex.
/// - [`TypesError::TooManyVertices`] if the result exceeds the `u32` range.
pub fn normalize(scene: &Scene) -> TypesResult<IndexedMesh> {
    if scene.is_empty() {
        return Err(TypesError::EmptyScene);
    }

    let mut merged = IndexedMesh::with_capacity(scene.vertex_count(), scene.face_count());

    for (i, sub) in scene.meshes.iter().enumerate() {
        if sub.name.is_empty() {
            sub.mesh.check_indices_named(&format!("sub-mesh {i}"))?;
        } else {
            sub.mesh.check_indices_named(&sub.name)?;
        }
        merged.append(&sub.mesh)?;
    }

    debug!(
        sub_meshes = scene.meshes.len(),
        vertices = merged.vertices.len(),
        faces = merged.faces.len(),
        "normalized scene"
    );

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{unit_cube, MeshTopology, Vertex};

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
    fn empty_scene_is_rejected() {
        assert_eq!(normalize(&Scene::new()), Err(TypesError::EmptyScene));
    }

    #[test]
    fn two_triangles_concatenate_with_offsets() {
        let mut scene = Scene::new();
        scene.push("a", triangle_at(0.0));
        scene.push("b", triangle_at(5.0));

        let mesh = normalize(&scene).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.face_count(), 2);
        assert!(mesh.faces[0].iter().all(|&i| i < 3));
        assert!(mesh.faces[1].iter().all(|&i| (3..6).contains(&i)));
    }

    #[test]
    fn offsets_are_cumulative() {
        let scene: Scene = [
            SubMesh::new("cube", unit_cube()),
            SubMesh::new("tri", triangle_at(3.0)),
            SubMesh::new("cube2", unit_cube()),
        ]
        .into_iter()
        .collect();

        let mesh = normalize(&scene).unwrap();
        assert_eq!(mesh.vertex_count(), 8 + 3 + 8);
        assert_eq!(mesh.face_count(), 12 + 1 + 12);
        assert_eq!(mesh.faces[12], [8, 9, 10]);
        assert_eq!(mesh.faces[13], [11, 13, 12]);
        assert!(mesh.check_indices().is_ok());
    }

    #[test]
    fn coincident_vertices_are_not_welded() {
        let mut scene = Scene::new();
        scene.push("a", triangle_at(0.0));
        scene.push("b", triangle_at(0.0));

        let mesh = normalize(&scene).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.vertices[0], mesh.vertices[3]);
    }

    #[test]
    fn single_mesh_round_trips() {
        let cube = unit_cube();
        let mesh = Scene::from(cube.clone()).normalize().unwrap();
        assert_eq!(mesh, cube);
    }

    #[test]
    fn out_of_range_index_names_the_sub_mesh() {
        let mut broken = triangle_at(0.0);
        broken.faces.push([0, 1, 3]);

        let mut scene = Scene::new();
        scene.push("good", triangle_at(0.0));
        scene.push("broken", broken);

        // Index 3 would be valid in the merged buffer, but not in its own sub-mesh.
        match normalize(&scene) {
            Err(TypesError::IndexOutOfBounds {
                mesh, face, index, ..
            }) => {
                assert_eq!(mesh, "broken");
                assert_eq!(face, 1);
                assert_eq!(index, 3);
            }
            other => panic!("expected IndexOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn unnamed_sub_mesh_is_named_by_position() {
        let mut broken = triangle_at(0.0);
        broken.faces[0] = [0, 1, 9];

        let scene = Scene::single(broken);
        let err = normalize(&scene).unwrap_err();
        assert!(err.to_string().contains("sub-mesh 0"));
    }

    #[test]
    fn scene_with_empty_sub_mesh_normalizes_to_empty_mesh() {
        let scene = Scene::single(IndexedMesh::new());
        let mesh = normalize(&scene).unwrap();
        assert!(mesh.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn scene_deserializes_from_loader_json() {
        let json = r#"{
            "meshes": [
                {"name": "body", "vertices": [[0,0,0],[1,0,0],[0,1,0]], "faces": [[0,1,2]]},
                {"vertices": [[0,0,1],[1,0,1],[0,1,1]], "faces": [[0,2,1]]}
            ]
        }"#;

        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.meshes.len(), 2);
        assert_eq!(scene.meshes[0].name, "body");
        assert!(scene.meshes[1].name.is_empty());

        let mesh = scene.normalize().unwrap();
        assert_eq!(mesh.faces[1], [3, 5, 4]);
    }
}
