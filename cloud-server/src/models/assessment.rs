//! Assessment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use trafficability_core::{AssessmentThresholds, IndicatorReading, Measurement, RiskLevel};

/// The six field measurements, all required and numeric
#[derive(Debug, Clone, Deserialize)]
pub struct AssessRequest {
    pub bulk_density: f64,
    pub cone_index: f64,
    pub soil_moisture_deficit: f64,
    pub tire_pressure: f64,
    pub wheel_load: f64,
    pub rut_depth: f64,
}

impl AssessRequest {
    pub fn into_measurement(self) -> Measurement {
        Measurement {
            bulk_density: self.bulk_density,
            cone_index: self.cone_index,
            soil_moisture_deficit: self.soil_moisture_deficit,
            tire_pressure: self.tire_pressure,
            wheel_load: self.wheel_load,
            rut_depth: self.rut_depth,
        }
    }
}

/// One completed assessment. Derived synchronously and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct AssessResponse {
    pub assessment_id: Uuid,
    pub risk_level: RiskLevel,
    pub rationale: Vec<String>,
    pub advisory: String,
    pub actions: Vec<String>,
    pub indicators: Vec<IndicatorReading>,
    pub thresholds_profile: String,
    pub assessed_at: DateTime<Utc>,
}

/// The active threshold set
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdsResponse {
    pub profile: String,
    pub thresholds: AssessmentThresholds,
}
