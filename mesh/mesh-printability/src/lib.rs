//! Printability checks for triangle meshes.
//!
//! This crate decides whether a mesh can go to a 3D printer as-is, and gives
//! rough print-time and material estimates from its volume.
//!
//! # Features
//!
//! - **Topology validation**: watertightness, face winding, minimum face
//!   count and degenerate faces, reported as [`TopologyIssue`]s
//! - **Edge analysis**: [`EdgeMap`] counts undirected edge use and direction
//! - **Estimates**: print time and material mass from volume
//!
//! # Example
//!
//! ```
//! use mesh_types::unit_cube;
//! use mesh_printability::{validate_topology, ValidationConfig};
//!
//! let report = validate_topology(&unit_cube(), &ValidationConfig::default()).unwrap();
//! assert!(report.is_valid());
//! assert!(report.is_watertight);
//! ```
//!
//! # Issue messages
//!
//! Issues render to fixed English messages, in check order:
//!
//! - `Model is not watertight (has holes)`
//! - `Inconsistent face winding`
//! - `Too few faces for a valid 3D model`
//! - `Contains N degenerate faces`

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod config;
mod edges;
mod error;
mod estimate;
mod issues;
mod validation;

pub use config::{EstimatorConfig, ValidationConfig};
pub use edges::{EdgeMap, EdgeUse};
pub use error::{PrintabilityError, PrintabilityResult};
pub use estimate::{estimate_print, PrintEstimate};
pub use issues::TopologyIssue;
pub use validation::{is_watertight, validate_topology, TopologyReport};
