//! Mesh analysis and print-validation engine.
//!
//! Takes a decoded [`Scene`] (one or more sub-meshes) and produces either
//! an [`AnalysisResult`] with metrics and rough print estimates, or a
//! [`ValidationResult`] listing manufacturability defects.
//!
//! Control flow for both entry points:
//!
//! 1. Merge the scene into one mesh ([`mesh_types::normalize`])
//! 2. Analysis: metrics ([`mesh_measure`]), then estimates
//!    ([`mesh_printability::estimate_print`])
//! 3. Validation: topology checks ([`mesh_printability::validate_topology`])
//!
//! Everything is pure: the same scene always yields the same result, and
//! nothing is kept between calls.
//!
//! # Example
//!
//! ```
//! use mesh_analysis::{analyze, validate_for_printing, Scene};
//! use mesh_types::unit_cube;
//!
//! let scene = Scene::single(unit_cube());
//!
//! let analysis = analyze(&scene).unwrap();
//! assert_eq!(analysis.triangle_count, 12);
//!
//! let validation = validate_for_printing(&scene).unwrap();
//! assert!(validation.valid);
//! ```
//!
//! # Degraded mode
//!
//! Deployments that cannot run geometry processing build a
//! [`PlaceholderEngine`] instead of a [`MeshEngine`] through
//! [`EngineConfig::build_service`]. Both implement [`GeometryService`].

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod format;
mod result;

pub use config::{EngineConfig, EngineMode};
pub use engine::{
    analyze, validate_for_printing, GeometryService, MeshEngine, PlaceholderEngine,
    PLACEHOLDER_NOTE,
};
pub use error::{EngineError, EngineResult};
pub use format::{check_format, ModelFormat, Operation};
pub use result::{AnalysisResult, BoundingBoxReport, ValidationResult};

// Re-export the input and configuration types callers need
pub use mesh_printability::{EstimatorConfig, ValidationConfig};
pub use mesh_types::{IndexedMesh, Scene, SubMesh, Vertex};
