//! Risk Classifier
//!
//! Only the classify logic - no types, no thresholds.
//! Input: Measurement
//! Output: RiskResult
//!
//! Deterministic and explainable: indicators are evaluated in a fixed order
//! (bulk density -> cone index -> SMD -> tire pressure -> wheel load -> rut
//! depth) and the overall level is the worst triggered severity, never an
//! average. One red flag is enough to dominate the verdict.

use super::rules::{AssessmentThresholds, SMD_FAVOURABLE};
use super::types::{Indicator, IndicatorReading, Measurement, RiskLevel, RiskResult};
use super::validate::{validate, ValidationError};
use crate::logic::advisory::{actions_for, advisory_for};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Main classification function
///
/// CORE LOGIC - total and deterministic given valid input
pub fn classify(measurement: &Measurement) -> Result<RiskResult, ValidationError> {
    classify_with_thresholds(measurement, &AssessmentThresholds::default())
}

/// Classification with custom thresholds
pub fn classify_with_thresholds(
    measurement: &Measurement,
    thresholds: &AssessmentThresholds,
) -> Result<RiskResult, ValidationError> {
    validate(measurement)?;

    let mut indicators = Vec::with_capacity(Indicator::ALL.len());
    for indicator in Indicator::ALL {
        let (level, note) = match indicator {
            Indicator::BulkDensity => assess_bulk_density(measurement.bulk_density, thresholds),
            Indicator::ConeIndex => assess_cone_index(measurement.cone_index, thresholds),
            Indicator::SoilMoistureDeficit => {
                assess_moisture(measurement.soil_moisture_deficit, thresholds)
            }
            Indicator::TirePressure => assess_tire_pressure(measurement.tire_pressure, thresholds),
            Indicator::WheelLoad => assess_wheel_load(measurement.wheel_load, thresholds),
            Indicator::RutDepth => assess_rut_depth(measurement.rut_depth, thresholds),
        };
        indicators.push(IndicatorReading {
            indicator,
            level,
            note,
        });
    }

    // Worst-case aggregation: the overall level is the maximum triggered
    // severity. Ties keep every rationale line, never pick-one.
    let risk_level = indicators
        .iter()
        .map(|r| r.level)
        .max()
        .unwrap_or(RiskLevel::Low);

    let rationale: Vec<String> = indicators
        .iter()
        .filter(|r| r.level > RiskLevel::Low)
        .map(|r| r.note.clone())
        .collect();

    Ok(RiskResult {
        risk_level,
        rationale,
        advisory: advisory_for(risk_level).to_string(),
        actions: actions_for(risk_level),
        indicators,
    })
}

// ============================================================================
// PER-INDICATOR RULES
// ============================================================================

fn assess_bulk_density(bd: f64, t: &AssessmentThresholds) -> (RiskLevel, String) {
    if bd > t.bulk_density_severe {
        (
            RiskLevel::Severe,
            format!(
                "Bulk density {bd:.2} g/cm3 above {:.2}: severely compacted, root-limiting layer likely",
                t.bulk_density_severe
            ),
        )
    } else if bd > t.bulk_density_critical {
        (
            RiskLevel::High,
            format!(
                "Bulk density {bd:.2} g/cm3 exceeds critical {:.2} for loamy soils: high compaction risk",
                t.bulk_density_critical
            ),
        )
    } else if bd > t.bulk_density_moderate {
        (
            RiskLevel::Moderate,
            format!(
                "Bulk density {bd:.2} g/cm3 ({:.2}-{:.2}): moderate compaction risk, watch root restriction",
                t.bulk_density_moderate, t.bulk_density_critical
            ),
        )
    } else {
        (
            RiskLevel::Low,
            format!("Bulk density {bd:.2} g/cm3 within the normal 1.0-1.4 range"),
        )
    }
}

// Low cone index means weak bearing capacity, so severity decreases as the
// reading rises.
fn assess_cone_index(ci: f64, t: &AssessmentThresholds) -> (RiskLevel, String) {
    if ci < t.cone_index_very_weak {
        (
            RiskLevel::High,
            format!(
                "Cone index {ci:.0} kPa below {:.0}: very weak bearing capacity, wheels will sink",
                t.cone_index_very_weak
            ),
        )
    } else if ci < t.cone_index_critical {
        (
            RiskLevel::Moderate,
            format!(
                "Cone index {ci:.0} kPa below the {:.0} kPa trafficability limit: reduced bearing capacity",
                t.cone_index_critical
            ),
        )
    } else {
        (
            RiskLevel::Low,
            format!("Cone index {ci:.0} kPa at or above the trafficability limit: adequate bearing capacity"),
        )
    }
}

fn assess_moisture(smd: f64, t: &AssessmentThresholds) -> (RiskLevel, String) {
    if smd < t.smd_wet {
        (
            RiskLevel::High,
            format!("SMD {smd:.1} mm: soil at or wetter than field capacity, high compaction risk"),
        )
    } else if smd < SMD_FAVOURABLE {
        (
            RiskLevel::Low,
            format!("SMD +{smd:.1} mm: marginal trafficability, prefer a drier window"),
        )
    } else {
        (
            RiskLevel::Low,
            format!("SMD +{smd:.1} mm: drier conditions favourable for traffic"),
        )
    }
}

fn assess_tire_pressure(tp: f64, t: &AssessmentThresholds) -> (RiskLevel, String) {
    if tp > t.tire_pressure_high {
        (
            RiskLevel::High,
            format!(
                "Tire pressure {tp:.0} kPa above {:.0}: high contact stress, surface compaction likely",
                t.tire_pressure_high
            ),
        )
    } else if tp > t.tire_pressure_elevated {
        (
            RiskLevel::Moderate,
            format!(
                "Tire pressure {tp:.0} kPa above {:.0}: elevated contact stress",
                t.tire_pressure_elevated
            ),
        )
    } else {
        (
            RiskLevel::Low,
            format!("Tire pressure {tp:.0} kPa within low-risk bounds"),
        )
    }
}

fn assess_wheel_load(wl: f64, t: &AssessmentThresholds) -> (RiskLevel, String) {
    if wl >= t.wheel_load_high {
        (
            RiskLevel::High,
            format!(
                "Wheel load {wl:.0} kg at or above {:.0}: subsoil compaction risk",
                t.wheel_load_high
            ),
        )
    } else {
        (
            RiskLevel::Low,
            format!("Wheel load {wl:.0} kg within low-risk bounds"),
        )
    }
}

fn assess_rut_depth(rut: f64, t: &AssessmentThresholds) -> (RiskLevel, String) {
    if rut > t.rut_depth_severe {
        (
            RiskLevel::Severe,
            format!(
                "Rut depth {rut:.1} cm above {:.1}: severe surface disturbance, structural damage under way",
                t.rut_depth_severe
            ),
        )
    } else if rut > t.rut_depth_noticeable {
        (
            RiskLevel::Moderate,
            format!("Rut depth {rut:.1} cm: noticeable surface deformation"),
        )
    } else {
        (RiskLevel::Low, format!("Rut depth {rut:.1} cm: negligible"))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dry_firm_field() -> Measurement {
        Measurement {
            bulk_density: 1.2,
            cone_index: 800.0,
            soil_moisture_deficit: 0.0,
            tire_pressure: 180.0,
            wheel_load: 2000.0,
            rut_depth: 1.0,
        }
    }

    #[test]
    fn test_no_triggers_is_low_with_empty_rationale() {
        let result = classify(&dry_firm_field()).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.rationale.is_empty());
        assert_eq!(result.indicators.len(), 6);
        assert!(result
            .indicators
            .iter()
            .all(|r| r.level == RiskLevel::Low));
    }

    #[test]
    fn test_compacted_wet_field_is_severe() {
        let m = Measurement {
            bulk_density: 1.9,
            cone_index: 300.0,
            soil_moisture_deficit: -10.0,
            tire_pressure: 250.0,
            wheel_load: 5000.0,
            rut_depth: 8.0,
        };
        let result = classify(&m).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Severe);
        assert!(result.rationale.iter().any(|r| r.contains("Bulk density")));
        assert!(result.rationale.iter().any(|r| r.contains("Rut depth")));
    }

    #[test]
    fn test_single_severe_rule_dominates() {
        // Everything benign except deep ruts
        let m = Measurement {
            rut_depth: 12.0,
            ..dry_firm_field()
        };
        let result = classify(&m).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Severe);
        assert_eq!(result.rationale.len(), 1);
    }

    #[test]
    fn test_moderate_only_trigger_is_moderate_overall() {
        let m = Measurement {
            bulk_density: 1.35,
            ..dry_firm_field()
        };
        let result = classify(&m).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Moderate);
        assert_eq!(result.rationale.len(), 1);
        assert!(result.rationale[0].contains("Bulk density"));
    }

    #[test]
    fn test_cone_index_severity_is_monotone() {
        // Rising cone index (stronger soil) must never raise the risk level
        let readings = [100.0, 299.0, 300.0, 500.0, 799.0, 800.0, 2000.0];
        let levels: Vec<RiskLevel> = readings
            .iter()
            .map(|&ci| {
                classify(&Measurement {
                    cone_index: ci,
                    ..dry_firm_field()
                })
                .unwrap()
                .risk_level
            })
            .collect();
        for pair in levels.windows(2) {
            assert!(
                pair[1].severity_level() <= pair[0].severity_level(),
                "severity rose with cone index: {levels:?}"
            );
        }
        assert_eq!(levels[0], RiskLevel::High);
        assert_eq!(levels[2], RiskLevel::Moderate);
        assert_eq!(levels[5], RiskLevel::Low);
    }

    #[test]
    fn test_rationale_follows_evaluation_order() {
        let m = Measurement {
            bulk_density: 1.5,
            tire_pressure: 250.0,
            rut_depth: 5.0,
            ..dry_firm_field()
        };
        let result = classify(&m).unwrap();
        assert_eq!(result.rationale.len(), 3);
        assert!(result.rationale[0].contains("Bulk density"));
        assert!(result.rationale[1].contains("Tire pressure"));
        assert!(result.rationale[2].contains("Rut depth"));
    }

    #[test]
    fn test_wet_soil_triggers_high() {
        let m = Measurement {
            soil_moisture_deficit: -5.0,
            ..dry_firm_field()
        };
        let result = classify(&m).unwrap();
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.rationale[0].contains("field capacity"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let m = Measurement {
            bulk_density: 1.5,
            soil_moisture_deficit: -3.0,
            ..dry_firm_field()
        };
        let first = classify(&m).unwrap();
        let second = classify(&m).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_validation_failure_returns_no_result() {
        let m = Measurement {
            tire_pressure: -5.0,
            ..dry_firm_field()
        };
        let err = classify(&m).unwrap_err();
        assert_eq!(err.field, "tire_pressure");
    }

    #[test]
    fn test_high_sensitivity_flags_marginal_density() {
        let m = Measurement {
            bulk_density: 1.28,
            ..dry_firm_field()
        };
        let default = classify(&m).unwrap();
        assert_eq!(default.risk_level, RiskLevel::Low);

        let cautious =
            classify_with_thresholds(&m, &AssessmentThresholds::high_sensitivity()).unwrap();
        assert_eq!(cautious.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_low_sensitivity_ignores_shallow_ruts() {
        let m = Measurement {
            rut_depth: 4.0,
            ..dry_firm_field()
        };
        let default = classify(&m).unwrap();
        assert_eq!(default.risk_level, RiskLevel::Moderate);

        let permissive =
            classify_with_thresholds(&m, &AssessmentThresholds::low_sensitivity()).unwrap();
        assert_eq!(permissive.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_advisory_matches_overall_level() {
        let low = classify(&dry_firm_field()).unwrap();
        assert_eq!(low.advisory, advisory_for(RiskLevel::Low));
        assert!(!low.actions.is_empty());

        let severe = classify(&Measurement {
            rut_depth: 15.0,
            ..dry_firm_field()
        })
        .unwrap();
        assert_eq!(severe.advisory, advisory_for(RiskLevel::Severe));
        assert_ne!(low.actions, severe.actions);
    }
}
