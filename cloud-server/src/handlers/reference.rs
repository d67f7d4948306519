//! Reference lookup handler

use axum::extract::Query;
use axum::Json;

use trafficability_core::reference;

use crate::models::{ReferenceQuery, ReferenceResponse};
use crate::{AppError, AppResult};

/// Answer for queries that match no reference topic
const FALLBACK: &str = "This service provides definitions, thresholds, and deterministic assessments. For an assessment, submit the six field measurements to the assessment endpoint.";

/// Look up a short agronomy definition by keyword
pub async fn lookup(Query(params): Query<ReferenceQuery>) -> AppResult<Json<ReferenceResponse>> {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(AppError::BadRequest(
            "query parameter 'q' is required".to_string(),
        ));
    }

    let answer = reference::lookup(&query).unwrap_or(FALLBACK);

    Ok(Json(ReferenceResponse {
        query,
        answer: answer.to_string(),
    }))
}
