//! Advisory Text
//!
//! Recommendation text per overall risk level. Text is fixed so that equal
//! inputs always produce byte-identical results.

use super::assessment::types::RiskLevel;

/// One-line recommendation for the overall level
pub fn advisory_for(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => {
            "Field conditions acceptable for operations; continue routine monitoring of bulk density and cone index."
        }
        RiskLevel::Moderate => {
            "Proceed with caution: lower tire pressures, reduce loads, and schedule work for drier windows."
        }
        RiskLevel::High => {
            "Postpone field traffic until the soil dries or loads can be reduced substantially."
        }
        RiskLevel::Severe => {
            "Do not traffic this field: at least one indicator shows severe risk of lasting structural damage."
        }
    }
}

/// Recommended actions for the overall level, most important first
pub fn actions_for(level: RiskLevel) -> Vec<String> {
    let actions: &[&str] = match level {
        RiskLevel::Low => &[
            "Continue routine monitoring of bulk density and cone index.",
            "Practice good traffic management (fixed lanes, wide tires) to avoid long-term compaction.",
        ],
        RiskLevel::Moderate => &[
            "Lower tire pressures and reduce loads where feasible.",
            "Schedule operations for drier windows; avoid repeated passes.",
            "Monitor bulk density and cone index after operations; adjust tactics accordingly.",
        ],
        RiskLevel::High => &[
            "Avoid field traffic until the soil dries (aim for SMD of +10 mm or more) or bulk density and cone index improve.",
            "Reduce tire pressure and/or axle and wheel loads; use wide tires or tracks.",
            "Use controlled traffic farming to confine compaction to fixed lanes.",
        ],
        RiskLevel::Severe => &[
            "Stop all field traffic until the soil dries (aim for SMD of +10 mm or more).",
            "Reduce tire pressure and axle loads before any unavoidable pass; use wide tires or tracks.",
            "Confine unavoidable traffic to fixed lanes (controlled traffic farming).",
            "If persistent subsoil compaction is confirmed, consider deep ripping where agronomically appropriate.",
        ],
    };
    actions.iter().map(|a| a.to_string()).collect()
}

// ============================================================================
// TESTS
// ============================================================================
