//! Print-time and material estimates from model volume.

use crate::config::EstimatorConfig;

/// Rough manufacturing estimate for a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintEstimate {
    /// Estimated print time in hours.
    pub print_time_hours: f64,
    /// Estimated material mass in grams.
    pub material_grams: f64,
}

/// Estimate print time and material mass from a volume.
///
/// Solid-volume heuristic: volume is converted to cm³, divided by the
/// throughput for hours and multiplied by the density for grams. A negative
/// volume (inside-out mesh) yields negative estimates; it is passed through,
/// not clamped.
///
/// # Example
///
/// ```
/// use mesh_printability::{estimate_print, EstimatorConfig};
///
/// // 100 cm³ of PLA
/// let estimate = estimate_print(100_000.0, &EstimatorConfig::pla_default());
/// assert_eq!(estimate.print_time_hours, 1.0);
/// assert_eq!(estimate.material_grams, 125.0);
/// ```
#[must_use]
pub fn estimate_print(volume: f64, config: &EstimatorConfig) -> PrintEstimate {
    let volume_cm3 = volume / config.mm3_per_cm3;
    PrintEstimate {
        print_time_hours: volume_cm3 / config.cm3_per_hour,
        material_grams: volume_cm3 * config.density_g_per_cm3,
    }
}
