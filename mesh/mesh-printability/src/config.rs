//! Validation thresholds and estimator constants.
//!
//! Both are heuristics tied to the input unit convention (millimeters).
//! They are configuration rather than literals so a deployment fed with
//! other units, or another filament, can adjust them.

use crate::error::{PrintabilityError, PrintabilityResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Thresholds for topology validation.
///
/// # Example
///
/// ```
/// use mesh_printability::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.min_face_count, 4);
/// assert!((config.degenerate_area_threshold - 1e-8).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationConfig {
    /// Faces with area strictly below this (in squared mesh units) are
    /// degenerate.
    pub degenerate_area_threshold: f64,

    /// Fewest faces a closed solid can have. A tetrahedron has 4.
    pub min_face_count: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            degenerate_area_threshold: 1e-8,
            min_face_count: 4,
        }
    }
}

impl ValidationConfig {
    /// Set the degenerate-face area threshold.
    #[must_use]
    pub fn with_degenerate_area_threshold(mut self, threshold: f64) -> Self {
        self.degenerate_area_threshold = threshold;
        self
    }

    /// Set the minimum face count.
    #[must_use]
    pub fn with_min_face_count(mut self, count: usize) -> Self {
        self.min_face_count = count;
        self
    }

    /// Check the thresholds are usable.
    ///
    /// # Errors
    ///
    /// Returns [`PrintabilityError::InvalidConfig`] if the area threshold is
    /// negative or not finite.
    pub fn check(&self) -> PrintabilityResult<()> {
        if !self.degenerate_area_threshold.is_finite() || self.degenerate_area_threshold < 0.0 {
            return Err(PrintabilityError::invalid_config(format!(
                "degenerate_area_threshold must be a finite, non-negative number (got {})",
                self.degenerate_area_threshold
            )));
        }
        Ok(())
    }
}

/// Constants for rough print-time and material estimates.
///
/// The defaults model PLA on a consumer FDM printer with millimeter input:
/// 1000 mm³ per cm³, 100 cm³ printed per hour, 1.25 g/cm³. Infill, shells
/// and printer speed are deliberately not modeled.
///
/// # Example
///
/// ```
/// use mesh_printability::EstimatorConfig;
///
/// let config = EstimatorConfig::pla_default().with_density(1.27);
/// assert!((config.density_g_per_cm3 - 1.27).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EstimatorConfig {
    /// Mesh volume units per cubic centimeter (1000 for millimeter input).
    pub mm3_per_cm3: f64,

    /// Printed volume per hour in cm³.
    pub cm3_per_hour: f64,

    /// Material density in g/cm³.
    pub density_g_per_cm3: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::pla_default()
    }
}

impl EstimatorConfig {
    /// PLA filament, millimeter input.
    #[must_use]
    pub fn pla_default() -> Self {
        Self {
            mm3_per_cm3: 1000.0,
            cm3_per_hour: 100.0,
            density_g_per_cm3: 1.25,
        }
    }

    /// Set the material density in g/cm³.
    #[must_use]
    pub fn with_density(mut self, density_g_per_cm3: f64) -> Self {
        self.density_g_per_cm3 = density_g_per_cm3;
        self
    }

    /// Set the print throughput in cm³ per hour.
    #[must_use]
    pub fn with_throughput(mut self, cm3_per_hour: f64) -> Self {
        self.cm3_per_hour = cm3_per_hour;
        self
    }

    /// Set how many mesh volume units make one cm³.
    #[must_use]
    pub fn with_volume_units_per_cm3(mut self, units: f64) -> Self {
        self.mm3_per_cm3 = units;
        self
    }

    /// Check every constant is a finite positive number.
    ///
    /// # Errors
    ///
    /// Returns [`PrintabilityError::InvalidConfig`] naming the first bad field.
    pub fn check(&self) -> PrintabilityResult<()> {
        for (name, value) in [
            ("mm3_per_cm3", self.mm3_per_cm3),
            ("cm3_per_hour", self.cm3_per_hour),
            ("density_g_per_cm3", self.density_g_per_cm3),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PrintabilityError::invalid_config(format!(
                    "{name} must be a finite, positive number (got {value})"
                )));
            }
        }
        Ok(())
    }
}
