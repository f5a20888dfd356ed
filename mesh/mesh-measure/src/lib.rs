//! Geometric metrics for triangle meshes.
//!
//! Computes the quantitative half of a model analysis:
//!
//! - **Volume**: signed sum of origin tetrahedra (divergence theorem)
//! - **Surface area**: sum of face areas
//! - **Bounding box**: min/max corners and per-axis extents
//! - **Triangle count**
//!
//! # Example
//!
//! ```
//! use mesh_types::unit_cube;
//! use mesh_measure::compute_metrics;
//!
//! let metrics = compute_metrics(&unit_cube()).unwrap();
//! assert!((metrics.volume - 1.0).abs() < 1e-10);
//! assert_eq!(metrics.bounds.max_array(), [1.0, 1.0, 1.0]);
//! ```
//!
//! # Winding
//!
//! Volume is only meaningful for closed meshes with consistent outward
//! winding. It is reported as computed, never corrected; consistency is a
//! separate check in `mesh-printability`.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod error;
mod metrics;

pub use bounds::{bounding_box, BoundingBox};
pub use error::{MeasureError, MeasureResult};
pub use metrics::{compute_metrics, signed_volume, surface_area, MeshMetrics};
