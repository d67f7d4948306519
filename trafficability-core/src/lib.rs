//! Trafficability Core
//!
//! Pure assessment engine for soil trafficability and compaction risk.
//! Takes six field measurements (bulk density, cone index, soil moisture
//! deficit, tire pressure, wheel load, rut depth), evaluates a fixed set of
//! threshold rules, and returns a risk classification with per-indicator
//! notes and recommended actions.
//!
//! No I/O, no async, no shared state. Every call is an independent
//! request/response evaluation.
//!
//! ```
//! use trafficability_core::{classify, Measurement, RiskLevel};
//!
//! let m = Measurement {
//!     bulk_density: 1.2,
//!     cone_index: 800.0,
//!     soil_moisture_deficit: 0.0,
//!     tire_pressure: 180.0,
//!     wheel_load: 2000.0,
//!     rut_depth: 1.0,
//! };
//! let result = classify(&m).unwrap();
//! assert_eq!(result.risk_level, RiskLevel::Low);
//! assert!(result.rationale.is_empty());
//! ```

pub mod logic;

pub use logic::assessment::{
    classify, classify_with_thresholds, AssessmentThresholds, Indicator, IndicatorReading,
    Measurement, RiskLevel, RiskResult, ValidationError,
};

pub use logic::advisory::{actions_for, advisory_for};

pub use logic::reference;
