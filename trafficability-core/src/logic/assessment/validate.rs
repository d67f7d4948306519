//! Measurement Validation
//!
//! Fail fast on missing-plausibility input; no clamping, no partial results.
//! Fields are checked in evaluation order and the first offender is reported.

use thiserror::Error;

use super::rules::BULK_DENSITY_PLAUSIBLE_MAX;
use super::types::Measurement;

/// A measurement field is outside its physically sensible range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid measurement field '{field}': {reason}")]
pub struct ValidationError {
    /// The offending field, named as it appears in the request
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Check every field for plausibility, in evaluation order
pub fn validate(m: &Measurement) -> Result<(), ValidationError> {
    check_finite("bulk_density", m.bulk_density)?;
    if m.bulk_density <= 0.0 {
        return Err(ValidationError::new("bulk_density", "must be positive (g/cm3)"));
    }
    if m.bulk_density > BULK_DENSITY_PLAUSIBLE_MAX {
        return Err(ValidationError::new(
            "bulk_density",
            format!("exceeds mineral particle density {BULK_DENSITY_PLAUSIBLE_MAX} g/cm3"),
        ));
    }

    check_finite("cone_index", m.cone_index)?;
    if m.cone_index < 0.0 {
        return Err(ValidationError::new("cone_index", "must not be negative (kPa)"));
    }

    // SMD is legitimately negative when the soil is wetter than field capacity
    check_finite("soil_moisture_deficit", m.soil_moisture_deficit)?;

    check_finite("tire_pressure", m.tire_pressure)?;
    if m.tire_pressure <= 0.0 {
        return Err(ValidationError::new("tire_pressure", "must be positive (kPa)"));
    }

    check_finite("wheel_load", m.wheel_load)?;
    if m.wheel_load <= 0.0 {
        return Err(ValidationError::new("wheel_load", "must be positive (kg)"));
    }

    check_finite("rut_depth", m.rut_depth)?;
    if m.rut_depth < 0.0 {
        return Err(ValidationError::new("rut_depth", "must not be negative (cm)"));
    }

    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new(field, "is not a finite number"))
    }
}

// ============================================================================
// TESTS
// ============================================================================
