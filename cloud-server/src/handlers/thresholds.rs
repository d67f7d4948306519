//! Thresholds inspection handler

use axum::extract::State;
use axum::Json;

use crate::models::ThresholdsResponse;
use crate::AppState;

/// Report the threshold set this deployment classifies with
pub async fn get(State(state): State<AppState>) -> Json<ThresholdsResponse> {
    Json(ThresholdsResponse {
        profile: state.config.sensitivity.clone(),
        thresholds: state.thresholds.clone(),
    })
}
