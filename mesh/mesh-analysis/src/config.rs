//! Engine configuration.
//!
//! Selects the [`GeometryService`] implementation once, when the service is
//! built, and carries the thresholds and estimator constants the full
//! engine uses.
//!
//! Deserializes from TOML (or any serde format); every field is optional:
//!
//! ```toml
//! mode = "full"
//! max_face_count = 2000000
//!
//! [validation]
//! degenerate_area_threshold = 1e-8
//!
//! [estimator]
//! density_g_per_cm3 = 1.27
//! ```

use mesh_printability::{EstimatorConfig, ValidationConfig};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::{GeometryService, MeshEngine, PlaceholderEngine};
use crate::error::{EngineError, EngineResult};

/// Which implementation serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    /// Compute everything from the geometry.
    #[default]
    Full,
    /// Return fixed placeholder results without looking at the geometry.
    ///
    /// For deployments where geometry processing is unavailable but the
    /// surrounding API must keep answering.
    Placeholder,
}

/// Configuration for building a [`GeometryService`].
///
/// # Example
///
/// ```
/// use mesh_analysis::{EngineConfig, EngineMode};
///
/// let service = EngineConfig::default().with_max_face_count(1_000_000).build_service().unwrap();
/// assert_eq!(service.name(), "mesh");
///
/// let service = EngineConfig::placeholder().build_service().unwrap();
/// assert_eq!(service.name(), "placeholder");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Implementation to build.
    pub mode: EngineMode,

    /// Topology validation thresholds.
    pub validation: ValidationConfig,

    /// Print-time and material constants.
    pub estimator: EstimatorConfig,

    /// Reject scenes with more faces than this. `None` means no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_face_count: Option<usize>,
}

impl EngineConfig {
    /// Full engine with default thresholds and PLA estimates.
    #[must_use]
    pub fn full_default() -> Self {
        Self::default()
    }

    /// Placeholder engine.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            mode: EngineMode::Placeholder,
            ..Self::default()
        }
    }

    /// Set the engine mode.
    #[must_use]
    pub fn with_mode(mut self, mode: EngineMode) -> Self {
        self.mode = mode;
        self
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

    /// Set the face-count ceiling.
    #[must_use]
    pub fn with_max_face_count(mut self, limit: usize) -> Self {
        self.max_face_count = Some(limit);
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] for a bad threshold, estimator
    /// constant, or a zero face-count ceiling.
    pub fn check(&self) -> EngineResult<()> {
        self.validation.check()?;
        self.estimator.check()?;
        if self.max_face_count == Some(0) {
            return Err(EngineError::invalid_config(
                "max_face_count must be at least 1",
            ));
        }
        Ok(())
    }

    /// Build the configured service.
    ///
    /// The configuration is checked even in placeholder mode, so switching
    /// modes never surfaces a latent error.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if [`check`](Self::check) fails.
    pub fn build_service(&self) -> EngineResult<Box<dyn GeometryService>> {
        self.check()?;
        match self.mode {
            EngineMode::Full => {
                let mut engine = MeshEngine::new()
                    .with_validation(self.validation.clone())
                    .with_estimator(self.estimator.clone());
                if let Some(limit) = self.max_face_count {
                    engine = engine.with_max_face_count(limit);
                }
                Ok(Box::new(engine))
            }
            EngineMode::Placeholder => {
                warn!("geometry processing disabled, serving placeholder results");
                Ok(Box::new(PlaceholderEngine))
            }
        }
    }
}
