//! Canonical mesh representation for mesh analysis.
//!
//! This crate provides the data model every analysis pass operates on:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`IndexedMesh`] - Flat vertex buffer plus triangle index buffer
//! - [`Triangle`] - A face resolved to positions, with per-face area and volume terms
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`Scene`] - Independent sub-meshes as decoded from a file, and [`normalize`]
//!   to merge them into one mesh
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//! Downstream estimators assume millimeters.
//!
//! # Coordinate System
//!
//! Right-handed. Face winding is **counter-clockwise (CCW) when viewed from
//! outside**, so normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshTopology, Scene, Vertex};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! let merged = Scene::single(mesh).normalize().unwrap();
//! assert_eq!(merged.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod error;
mod mesh;
mod scene;
mod traits;
mod triangle;
mod vertex;

pub use bounds::Aabb;
pub use error::{TypesError, TypesResult};
pub use mesh::{unit_cube, IndexedMesh};
pub use scene::{normalize, Scene, SubMesh};
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
