//! Assessment Module
//!
//! Classifies trafficability risk from six field measurements.
//! This is the CORE STEP - where Low/Moderate/High/Severe is decided.
//!
//! ## Structure
//! - `types`: Core types (RiskLevel, Measurement, RiskResult, etc.)
//! - `rules`: Thresholds and constants
//! - `validate`: Input validation (fail fast, no partial results)
//! - `classifier`: Classification logic
//!
//! ## Usage
//! ```ignore
//! use trafficability_core::logic::assessment::{classify, Measurement, RiskLevel};
//!
//! let result = classify(&measurement)?;
//! match result.risk_level {
//!     RiskLevel::Low => println!("Safe to work"),
//!     RiskLevel::Moderate => println!("Proceed with caution"),
//!     RiskLevel::High | RiskLevel::Severe => println!("Stay off the field"),
//! }
//! ```

pub mod classifier;
pub mod rules;
pub mod types;
pub mod validate;

// Re-export main types for convenience
pub use types::{Indicator, IndicatorReading, Measurement, RiskLevel, RiskResult};

pub use rules::{
    AssessmentThresholds, BULK_DENSITY_CRITICAL, CONE_INDEX_CRITICAL, RUT_DEPTH_SEVERE,
    WHEEL_LOAD_HIGH,
};

pub use validate::{validate, ValidationError};

pub use classifier::{classify, classify_with_thresholds};
