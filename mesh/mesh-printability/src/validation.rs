//! Topology validation for printability.
//!
//! Runs four independent checks over a mesh and collects the defects they
//! find. Checks never short-circuit each other.

use mesh_types::{IndexedMesh, MeshTopology};
use rayon::prelude::*;
use tracing::debug;

use crate::config::ValidationConfig;
use crate::edges::EdgeMap;
use crate::error::PrintabilityResult;
use crate::issues::TopologyIssue;

/// Result of validating a mesh's topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyReport {
    /// Issues in check order: watertightness, winding, face count,
    /// degenerate faces.
    pub issues: Vec<TopologyIssue>,

    /// Number of faces.
    pub triangle_count: usize,

    /// Every edge is shared by exactly two faces.
    pub is_watertight: bool,

    /// No two-face edge is traversed twice in the same direction.
    pub is_winding_consistent: bool,

    /// Faces with area below the configured threshold.
    pub degenerate_face_count: usize,

    /// Edges used by exactly one face.
    pub boundary_edge_count: usize,

    /// Edges used by more than two faces.
    pub non_manifold_edge_count: usize,
}

impl TopologyReport {
    /// A mesh is valid when no issue was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Human-readable issue messages in check order.
    #[must_use]
    pub fn issue_messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// Check whether a given kind of issue was reported.
    #[must_use]
    pub fn has_issue(&self, kind: &str) -> bool {
        self.issues.iter().any(|i| i.as_str() == kind)
    }
}

/// Validate a mesh's topology for printing.
///
/// Checks, in order:
///
/// 1. **Watertightness**: every undirected edge appears in exactly two faces.
/// 2. **Winding**: every edge shared by two faces is traversed once in each
///    direction.
/// 3. **Face count**: at least `min_face_count` faces.
/// 4. **Degenerate faces**: no face with area below
///    `degenerate_area_threshold`.
///
/// Each check adds at most one issue.
///
/// # Errors
///
/// Returns [`PrintabilityError::InvalidMesh`](crate::PrintabilityError::InvalidMesh)
/// if a face references a missing vertex, or
/// [`PrintabilityError::InvalidConfig`](crate::PrintabilityError::InvalidConfig)
/// for an unusable threshold.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_printability::{validate_topology, ValidationConfig};
///
/// let mut cube = unit_cube();
/// cube.faces.pop();
///
/// let report = validate_topology(&cube, &ValidationConfig::default()).unwrap();
/// assert!(!report.is_valid());
/// assert_eq!(report.issue_messages(), vec!["Model is not watertight (has holes)"]);
/// ```
pub fn validate_topology(
    mesh: &IndexedMesh,
    config: &ValidationConfig,
) -> PrintabilityResult<TopologyReport> {
    config.check()?;
    mesh.check_indices()?;

    let edges = EdgeMap::build(&mesh.faces);
    let is_watertight = edges.is_watertight();
    let is_winding_consistent = edges.is_winding_consistent();
    let triangle_count = mesh.face_count();
    let degenerate_face_count = count_degenerate_faces(mesh, config.degenerate_area_threshold);

    let mut issues = Vec::new();

    if !is_watertight {
        issues.push(TopologyIssue::NotWatertight);
    }

    if !is_winding_consistent {
        issues.push(TopologyIssue::InconsistentWinding);
    }

    if triangle_count < config.min_face_count {
        issues.push(TopologyIssue::TooFewFaces {
            count: triangle_count,
        });
    }

    if degenerate_face_count > 0 {
        issues.push(TopologyIssue::DegenerateFaces {
            count: degenerate_face_count,
        });
    }

    let report = TopologyReport {
        issues,
        triangle_count,
        is_watertight,
        is_winding_consistent,
        degenerate_face_count,
        boundary_edge_count: edges.boundary_edge_count(),
        non_manifold_edge_count: edges.non_manifold_edge_count(),
    };

    debug!(
        faces = triangle_count,
        watertight = is_watertight,
        winding_consistent = is_winding_consistent,
        degenerate = degenerate_face_count,
        boundary_edges = report.boundary_edge_count,
        issues = report.issues.len(),
        "validated mesh topology"
    );

    Ok(report)
}

/// Check watertightness alone.
///
/// Same rule as the validator's first check, for callers that need only
/// the flag.
#[must_use]
pub fn is_watertight(mesh: &IndexedMesh) -> bool {
    EdgeMap::build(&mesh.faces).is_watertight()
}

/// Count faces with area below the threshold.
///
/// Per-face and independent, so it runs in parallel. Indices must be valid.
fn count_degenerate_faces(mesh: &IndexedMesh, area_threshold: f64) -> usize {
    (0..mesh.faces.len())
        .into_par_iter()
        .filter(|&i| {
            mesh.triangle(i)
                .is_some_and(|tri| tri.is_degenerate(area_threshold))
        })
        .count()
}
