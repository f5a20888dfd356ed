//! Public result shapes.
//!
//! Field names serialize in camelCase; existing clients read these keys.

use mesh_measure::BoundingBox;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds as plain coordinate triples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBoxReport {
    /// Component-wise minimum over all vertices.
    pub min: [f64; 3],
    /// Component-wise maximum over all vertices.
    pub max: [f64; 3],
    /// Per-axis extents, `max - min`.
    pub dimensions: [f64; 3],
}

impl From<&BoundingBox> for BoundingBoxReport {
    fn from(bounds: &BoundingBox) -> Self {
        Self {
            min: bounds.min_array(),
            max: bounds.max_array(),
            dimensions: bounds.dimensions_array(),
        }
    }
}

/// Metrics and estimates for one model.
///
/// ```
/// use mesh_analysis::{analyze, Scene};
/// use mesh_types::unit_cube;
///
/// let result = analyze(&Scene::single(unit_cube())).unwrap();
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["triangleCount"], 12);
/// assert_eq!(json["boundingBox"]["max"], serde_json::json!([1.0, 1.0, 1.0]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Signed volume; negative for inside-out meshes.
    pub volume: f64,
    /// Total face area.
    pub surface_area: f64,
    /// Vertex bounds.
    pub bounding_box: BoundingBoxReport,
    /// Number of faces.
    pub triangle_count: usize,
    /// Every edge is shared by exactly two faces.
    pub is_watertight: bool,
    /// Rough print time in hours.
    #[serde(default)]
    pub estimated_print_time: Option<f64>,
    /// Rough material mass in grams.
    #[serde(default)]
    pub estimated_material: Option<f64>,
}

/// Printability verdict for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// No issues were found.
    pub valid: bool,
    /// Issue messages in check order.
    pub issues: Vec<String>,
    /// Number of faces.
    pub triangle_count: usize,
    /// Every edge is shared by exactly two faces.
    pub is_watertight: bool,
    /// Set only when validation did not actually run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
