//! Analysis and validation services.
//!
//! [`GeometryService`] is the seam the outer application talks to. Two
//! implementations exist: [`MeshEngine`] computes results from geometry,
//! [`PlaceholderEngine`] returns fixed values. Which one runs is decided
//! when the service is built (see [`EngineConfig`](crate::EngineConfig)),
//! never per request.

use mesh_measure::compute_metrics;
use mesh_printability::{
    estimate_print, is_watertight, validate_topology, EstimatorConfig, ValidationConfig,
};
use mesh_types::{IndexedMesh, MeshTopology, Scene};
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::result::{AnalysisResult, BoundingBoxReport, ValidationResult};

/// Note attached to placeholder validation results.
///
/// Existing clients match on this exact text.
pub const PLACEHOLDER_NOTE: &str = "Trimesh not available, validation skipped";

/// Analysis and validation of decoded scenes.
///
/// Implementations hold no per-request state and may be shared across
/// threads.
pub trait GeometryService: Send + Sync {
    /// Short implementation name for logs and reports.
    fn name(&self) -> &'static str;

    /// Compute metrics and estimates for a scene.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the scene cannot be analyzed.
    fn analyze(&self, scene: &Scene) -> EngineResult<AnalysisResult>;

    /// Check a scene for printability.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the scene cannot be validated.
    fn validate_for_printing(&self, scene: &Scene) -> EngineResult<ValidationResult>;
}

/// The full engine: normalizes the scene and computes everything from it.
///
/// # Example
///
/// ```
/// use mesh_analysis::{GeometryService, MeshEngine, Scene};
/// use mesh_types::unit_cube;
///
/// let engine = MeshEngine::new();
/// let result = engine.validate_for_printing(&Scene::single(unit_cube())).unwrap();
/// assert!(result.valid);
/// assert!(result.issues.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshEngine {
    validation: ValidationConfig,
    estimator: EstimatorConfig,
    max_face_count: Option<usize>,
}

impl MeshEngine {
    /// Engine with default thresholds, PLA estimates and no face limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation thresholds.
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Set the estimator constants.
    #[must_use]
    pub fn with_estimator(mut self, estimator: EstimatorConfig) -> Self {
        self.estimator = estimator;
        self
    }

    /// Reject scenes with more than `limit` faces.
    #[must_use]
    pub fn with_max_face_count(mut self, limit: usize) -> Self {
        self.max_face_count = Some(limit);
        self
    }

    /// Validation thresholds in use.
    #[must_use]
    pub fn validation(&self) -> &ValidationConfig {
        &self.validation
    }

    /// Estimator constants in use.
    #[must_use]
    pub fn estimator(&self) -> &EstimatorConfig {
        &self.estimator
    }

    /// Enforce the face ceiling, then normalize.
    fn prepare(&self, scene: &Scene) -> EngineResult<IndexedMesh> {
        if let Some(limit) = self.max_face_count {
            let face_count = scene.face_count();
            if face_count > limit {
                return Err(EngineError::CapacityExceeded { face_count, limit });
            }
        }

        Ok(scene.normalize()?)
    }
}

impl GeometryService for MeshEngine {
    fn name(&self) -> &'static str {
        "mesh"
    }

    fn analyze(&self, scene: &Scene) -> EngineResult<AnalysisResult> {
        self.estimator.check()?;
        let mesh = self.prepare(scene)?;

        if mesh.is_empty() {
            return Err(EngineError::UnsupportedGeometry {
                vertex_count: mesh.vertex_count(),
                face_count: mesh.face_count(),
            });
        }

        let metrics = compute_metrics(&mesh)?;
        let watertight = is_watertight(&mesh);
        let estimate = estimate_print(metrics.volume, &self.estimator);

        info!(
            sub_meshes = scene.meshes.len(),
            triangles = metrics.triangle_count,
            volume = metrics.volume,
            watertight,
            "analyzed model"
        );

        Ok(AnalysisResult {
            volume: metrics.volume,
            surface_area: metrics.surface_area,
            bounding_box: BoundingBoxReport::from(&metrics.bounds),
            triangle_count: metrics.triangle_count,
            is_watertight: watertight,
            estimated_print_time: Some(estimate.print_time_hours),
            estimated_material: Some(estimate.material_grams),
        })
    }

    fn validate_for_printing(&self, scene: &Scene) -> EngineResult<ValidationResult> {
        let mesh = self.prepare(scene)?;
        let report = validate_topology(&mesh, &self.validation)?;

        info!(
            sub_meshes = scene.meshes.len(),
            triangles = report.triangle_count,
            issues = report.issues.len(),
            "validated model"
        );

        Ok(ValidationResult {
            valid: report.is_valid(),
            issues: report.issue_messages(),
            triangle_count: report.triangle_count,
            is_watertight: report.is_watertight,
            note: None,
        })
    }
}

/// Stand-in used when geometry processing is unavailable.
///
/// Ignores its input and always succeeds with fixed values, so clients of
/// the surrounding API keep working.
///
/// ```
/// use mesh_analysis::{GeometryService, PlaceholderEngine, Scene};
///
/// let result = PlaceholderEngine.analyze(&Scene::new()).unwrap();
/// assert_eq!(result.triangle_count, 1000);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderEngine;

impl PlaceholderEngine {
    /// The fixed analysis result.
    #[must_use]
    pub fn analysis_result() -> AnalysisResult {
        AnalysisResult {
            volume: 1000.0,
            surface_area: 600.0,
            bounding_box: BoundingBoxReport {
                min: [0.0, 0.0, 0.0],
                max: [10.0, 10.0, 10.0],
                dimensions: [10.0, 10.0, 10.0],
            },
            triangle_count: 1000,
            is_watertight: true,
            estimated_print_time: Some(0.5),
            estimated_material: Some(1.25),
        }
    }

    /// The fixed validation result.
    #[must_use]
    pub fn validation_result() -> ValidationResult {
        ValidationResult {
            valid: true,
            issues: Vec::new(),
            triangle_count: 1000,
            is_watertight: true,
            note: Some(PLACEHOLDER_NOTE.to_string()),
        }
    }
}

impl GeometryService for PlaceholderEngine {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn analyze(&self, scene: &Scene) -> EngineResult<AnalysisResult> {
        debug!(
            sub_meshes = scene.meshes.len(),
            "placeholder analysis, scene ignored"
        );
        Ok(Self::analysis_result())
    }

    fn validate_for_printing(&self, scene: &Scene) -> EngineResult<ValidationResult> {
        debug!(
            sub_meshes = scene.meshes.len(),
            "placeholder validation, scene ignored"
        );
        Ok(Self::validation_result())
    }
}

/// Analyze a scene with the default [`MeshEngine`].
///
/// # Errors
///
/// - [`EngineError::EmptyModel`] if the scene has no sub-meshes
/// - [`EngineError::MalformedGeometry`] if a face references a missing vertex
/// - [`EngineError::UnsupportedGeometry`] if the merged mesh has no vertices
///   or no faces
///
/// # Example
///
/// ```
/// use mesh_analysis::{analyze, Scene};
/// use mesh_types::unit_cube;
///
/// let result = analyze(&Scene::single(unit_cube())).unwrap();
/// assert!((result.volume - 1.0).abs() < 1e-12);
/// assert!((result.surface_area - 6.0).abs() < 1e-12);
/// assert!(result.is_watertight);
/// ```
pub fn analyze(scene: &Scene) -> EngineResult<AnalysisResult> {
    MeshEngine::new().analyze(scene)
}

/// Validate a scene for printing with the default [`MeshEngine`].
///
/// # Errors
///
/// - [`EngineError::EmptyModel`] if the scene has no sub-meshes
/// - [`EngineError::MalformedGeometry`] if a face references a missing vertex
///
/// # Example
///
/// ```
/// use mesh_analysis::{validate_for_printing, Scene};
/// use mesh_types::unit_cube;
///
/// let mut cube = unit_cube();
/// cube.faces.pop();
///
/// let result = validate_for_printing(&Scene::single(cube)).unwrap();
/// assert!(!result.valid);
/// assert_eq!(result.issues, vec!["Model is not watertight (has holes)"]);
/// ```
pub fn validate_for_printing(scene: &Scene) -> EngineResult<ValidationResult> {
    MeshEngine::new().validate_for_printing(scene)
}
