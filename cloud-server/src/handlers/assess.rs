//! Assessment handler

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use trafficability_core::classify_with_thresholds;

use crate::models::{AssessRequest, AssessResponse};
use crate::{AppResult, AppState};

/// Run one assessment over the submitted measurements.
/// Stateless: nothing is cached or stored between calls.
pub async fn assess(
    State(state): State<AppState>,
    payload: Result<Json<AssessRequest>, JsonRejection>,
) -> AppResult<Json<AssessResponse>> {
    let Json(req) = payload?;

    let measurement = req.into_measurement();
    let result = classify_with_thresholds(&measurement, &state.thresholds)?;

    tracing::info!(
        risk_level = %result.risk_level,
        triggered = result.rationale.len(),
        "assessment complete"
    );

    Ok(Json(AssessResponse {
        assessment_id: Uuid::new_v4(),
        risk_level: result.risk_level,
        rationale: result.rationale,
        advisory: result.advisory,
        actions: result.actions,
        indicators: result.indicators,
        thresholds_profile: state.config.sensitivity.clone(),
        assessed_at: Utc::now(),
    }))
}
