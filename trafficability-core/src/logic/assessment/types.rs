//! Assessment Types
//!
//! Core types for trafficability assessment.
//! No logic here - only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVELS
// ============================================================================

/// Overall trafficability risk, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No risk factor triggered, routine operations acceptable
    Low,
    /// At least one indicator elevated, work with precautions
    Moderate,
    /// Traffic likely to cause compaction damage
    High,
    /// Active structural damage, stay off the field
    Severe,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Severe => "severe",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Moderate => 1,
            RiskLevel::High => 2,
            RiskLevel::Severe => 3,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#10b981",      // Green
            RiskLevel::Moderate => "#f59e0b", // Yellow
            RiskLevel::High => "#f97316",     // Orange
            RiskLevel::Severe => "#ef4444",   // Red
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Severe)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// MEASUREMENT
// ============================================================================

/// One set of field measurements, read-only per evaluation.
/// All six fields are required; validation rejects implausible values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Bulk density (g/cm3), typically 0.8 - 2.0
    pub bulk_density: f64,
    /// Cone penetrometer resistance (kPa)
    pub cone_index: f64,
    /// Soil moisture deficit (mm); negative means wetter than field capacity
    pub soil_moisture_deficit: f64,
    /// Tire inflation pressure (kPa)
    pub tire_pressure: f64,
    /// Representative wheel load (kg)
    pub wheel_load: f64,
    /// Observed rut depth (cm)
    pub rut_depth: f64,
}

// ============================================================================
// INDICATORS
// ============================================================================

/// The six measured dimensions, in fixed evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    BulkDensity,
    ConeIndex,
    SoilMoistureDeficit,
    TirePressure,
    WheelLoad,
    RutDepth,
}

impl Indicator {
    /// Evaluation order: bulk density -> cone index -> SMD -> tire pressure
    /// -> wheel load -> rut depth
    pub const ALL: [Indicator; 6] = [
        Indicator::BulkDensity,
        Indicator::ConeIndex,
        Indicator::SoilMoistureDeficit,
        Indicator::TirePressure,
        Indicator::WheelLoad,
        Indicator::RutDepth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::BulkDensity => "bulk_density",
            Indicator::ConeIndex => "cone_index",
            Indicator::SoilMoistureDeficit => "soil_moisture_deficit",
            Indicator::TirePressure => "tire_pressure",
            Indicator::WheelLoad => "wheel_load",
            Indicator::RutDepth => "rut_depth",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-indicator outcome, produced whether or not the rule triggered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub indicator: Indicator,
    pub level: RiskLevel,
    pub note: String,
}

// ============================================================================
// RISK RESULT
// ============================================================================

/// Result of a trafficability assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Worst-case severity across all triggered rules
    pub risk_level: RiskLevel,
    /// One explanation per triggered rule, in evaluation order.
    /// Empty exactly when `risk_level` is `Low`.
    pub rationale: Vec<String>,
    /// One-line recommendation matched to the overall level
    pub advisory: String,
    /// Recommended actions for the overall level
    pub actions: Vec<String>,
    /// Level and note for every indicator, in evaluation order
    pub indicators: Vec<IndicatorReading>,
}
