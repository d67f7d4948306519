//! Assessment Rules & Thresholds
//!
//! Literature-derived cutoffs for each indicator.
//! No classification logic here - only constants and config.

use serde::{Deserialize, Serialize};

// ============================================================================
// BULK DENSITY (g/cm3)
// ============================================================================

/// Above this = moderate compaction risk (upper end of the normal 1.0-1.4 range)
pub const BULK_DENSITY_MODERATE: f64 = 1.30;

/// Critical bulk density for loamy soils; above this = high compaction risk
pub const BULK_DENSITY_CRITICAL: f64 = 1.43;

/// Above this = root-limiting layer likely
pub const BULK_DENSITY_SEVERE: f64 = 1.60;

/// Mineral particle density; bulk density cannot physically exceed this
pub const BULK_DENSITY_PLAUSIBLE_MAX: f64 = 2.65;

// ============================================================================
// CONE INDEX (kPa)
// ============================================================================

/// Lower bound of the 800-1430 kPa critical trafficability band.
/// Below this the soil offers reduced bearing capacity.
pub const CONE_INDEX_CRITICAL: f64 = 800.0;

/// Below this = very weak bearing, wheels sink
pub const CONE_INDEX_VERY_WEAK: f64 = 300.0;

// ============================================================================
// SOIL MOISTURE DEFICIT (mm)
// ============================================================================

/// Below this the soil is at or wetter than field capacity
pub const SMD_WET: f64 = 0.0;

/// At or above this, conditions are comfortably dry for traffic
pub const SMD_FAVOURABLE: f64 = 10.0;

// ============================================================================
// TIRE PRESSURE (kPa)
// ============================================================================

/// Above this, contact stress starts to matter on moist topsoil
pub const TIRE_PRESSURE_ELEVATED: f64 = 200.0;

/// Above this = high contact stress, surface compaction likely
pub const TIRE_PRESSURE_HIGH: f64 = 300.0;

// ============================================================================
// WHEEL LOAD (kg)
// ============================================================================

/// At or above this, the stress bulb reaches the subsoil
pub const WHEEL_LOAD_HIGH: f64 = 5000.0;

// ============================================================================
// RUT DEPTH (cm)
// ============================================================================

/// Above this = noticeable surface deformation
pub const RUT_DEPTH_NOTICEABLE: f64 = 3.0;

/// Above this = severe surface disturbance
pub const RUT_DEPTH_SEVERE: f64 = 10.0;

// ============================================================================
// CONFIGURABLE THRESHOLDS (selected per deployment, never mutated at runtime)
// ============================================================================

/// Thresholds for classification (configurable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentThresholds {
    /// Bulk density above this = Moderate
    pub bulk_density_moderate: f64,
    /// Bulk density above this = High
    pub bulk_density_critical: f64,
    /// Bulk density above this = Severe
    pub bulk_density_severe: f64,
    /// Cone index below this = Moderate
    pub cone_index_critical: f64,
    /// Cone index below this = High
    pub cone_index_very_weak: f64,
    /// SMD below this = High (wet soil)
    pub smd_wet: f64,
    /// Tire pressure above this = Moderate
    pub tire_pressure_elevated: f64,
    /// Tire pressure above this = High
    pub tire_pressure_high: f64,
    /// Wheel load at or above this = High
    pub wheel_load_high: f64,
    /// Rut depth above this = Moderate
    pub rut_depth_noticeable: f64,
    /// Rut depth above this = Severe
    pub rut_depth_severe: f64,
}

impl Default for AssessmentThresholds {
    fn default() -> Self {
        Self {
            bulk_density_moderate: BULK_DENSITY_MODERATE,
            bulk_density_critical: BULK_DENSITY_CRITICAL,
            bulk_density_severe: BULK_DENSITY_SEVERE,
            cone_index_critical: CONE_INDEX_CRITICAL,
            cone_index_very_weak: CONE_INDEX_VERY_WEAK,
            smd_wet: SMD_WET,
            tire_pressure_elevated: TIRE_PRESSURE_ELEVATED,
            tire_pressure_high: TIRE_PRESSURE_HIGH,
            wheel_load_high: WHEEL_LOAD_HIGH,
            rut_depth_noticeable: RUT_DEPTH_NOTICEABLE,
            rut_depth_severe: RUT_DEPTH_SEVERE,
        }
    }
}

impl AssessmentThresholds {
    /// High sensitivity - lower cutoffs, flags marginal conditions sooner
    pub fn high_sensitivity() -> Self {
        Self {
            bulk_density_moderate: 1.25,
            bulk_density_critical: 1.38,
            cone_index_critical: 900.0,
            tire_pressure_elevated: 150.0,
            wheel_load_high: 4000.0,
            rut_depth_noticeable: 2.0,
            ..Default::default()
        }
    }

    /// Low sensitivity - higher cutoffs, fewer flags on resilient soils
    pub fn low_sensitivity() -> Self {
        Self {
            bulk_density_moderate: 1.38,
            cone_index_critical: 700.0,
            tire_pressure_elevated: 250.0,
            rut_depth_noticeable: 5.0,
            ..Default::default()
        }
    }
}
