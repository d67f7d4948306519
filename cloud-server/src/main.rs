//! Trafficability Advisor Cloud Server
//!
//! Stateless HTTP front for the trafficability-core assessment engine.
//! Every request is an independent call into the pure classifier; there is
//! no database, no session state, and nothing survives a response.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              TRAFFICABILITY CLOUD                    │
//! ├──────────────────────────────────────────────────────┤
//! │  ┌───────────┐        ┌───────────────────────────┐  │
//! │  │  API      │ ─────► │  trafficability-core      │  │
//! │  │  (Axum)   │ ◄───── │  (pure risk classifier)   │  │
//! │  └───────────┘        └───────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trafficability_core::AssessmentThresholds;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trafficability_cloud=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();
    let port = config.port;

    tracing::info!("Trafficability Advisor Cloud Server starting...");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Threshold profile: {}", config.sensitivity);

    // Build application state
    let state = AppState {
        thresholds: config.thresholds(),
        config,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub thresholds: AssessmentThresholds,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/assess", post(handlers::assess::assess))
        .route("/api/v1/reference", get(handlers::reference::lookup))
        .route("/api/v1/thresholds", get(handlers::thresholds::get))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = config::Config {
            port: 0,
            environment: "test".to_string(),
            sensitivity: "default".to_string(),
        };
        create_router(AppState {
            thresholds: config.thresholds(),
            config,
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_assess_low_risk_field() {
        let request = post_json(
            "/api/v1/assess",
            json!({
                "bulk_density": 1.2,
                "cone_index": 800.0,
                "soil_moisture_deficit": 0.0,
                "tire_pressure": 180.0,
                "wheel_load": 2000.0,
                "rut_depth": 1.0
            }),
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["risk_level"], "low");
        assert_eq!(body["rationale"].as_array().unwrap().len(), 0);
        assert_eq!(body["indicators"].as_array().unwrap().len(), 6);
        assert_eq!(body["thresholds_profile"], "default");
    }

    #[tokio::test]
    async fn test_assess_severe_risk_field() {
        let request = post_json(
            "/api/v1/assess",
            json!({
                "bulk_density": 1.9,
                "cone_index": 300.0,
                "soil_moisture_deficit": -10.0,
                "tire_pressure": 250.0,
                "wheel_load": 5000.0,
                "rut_depth": 8.0
            }),
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["risk_level"], "severe");
        let rationale = body["rationale"].as_array().unwrap();
        assert!(rationale
            .iter()
            .any(|r| r.as_str().unwrap().contains("Bulk density")));
        assert!(rationale
            .iter()
            .any(|r| r.as_str().unwrap().contains("Rut depth")));
    }

    #[tokio::test]
    async fn test_assess_invalid_field_is_bad_request() {
        let request = post_json(
            "/api/v1/assess",
            json!({
                "bulk_density": 1.2,
                "cone_index": 800.0,
                "soil_moisture_deficit": 0.0,
                "tire_pressure": -5.0,
                "wheel_load": 2000.0,
                "rut_depth": 1.0
            }),
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("tire_pressure"));
    }

    #[tokio::test]
    async fn test_assess_missing_field_is_bad_request() {
        // rut_depth omitted
        let request = post_json(
            "/api/v1/assess",
            json!({
                "bulk_density": 1.2,
                "cone_index": 800.0,
                "soil_moisture_deficit": 0.0,
                "tire_pressure": 180.0,
                "wheel_load": 2000.0
            }),
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("rut_depth"));
    }

    #[tokio::test]
    async fn test_reference_lookup() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/reference?q=bulk%20density")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["answer"].as_str().unwrap().contains("1.43"));
    }

    #[tokio::test]
    async fn test_reference_unknown_topic_gets_fallback() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/reference?q=harvest%20dates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["answer"].as_str().unwrap().contains("deterministic assessments"));
    }

    #[tokio::test]
    async fn test_reference_missing_query_is_bad_request() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/reference")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_thresholds_endpoint_reports_active_profile() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/thresholds")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["profile"], "default");
        assert_eq!(body["thresholds"]["bulk_density_critical"], 1.43);
    }
}
