//! Configuration module

use std::env;

use trafficability_core::AssessmentThresholds;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Threshold profile: "default", "high", or "low"
    pub sensitivity: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            sensitivity: env::var("SENSITIVITY")
                .unwrap_or_else(|_| "default".to_string()),
        }
    }

    /// Threshold set selected by the sensitivity profile
    pub fn thresholds(&self) -> AssessmentThresholds {
        match self.sensitivity.as_str() {
            "high" => AssessmentThresholds::high_sensitivity(),
            "low" => AssessmentThresholds::low_sensitivity(),
            "default" => AssessmentThresholds::default(),
            other => {
                tracing::warn!("Unknown SENSITIVITY '{}', falling back to defaults", other);
                AssessmentThresholds::default()
            }
        }
    }
}
