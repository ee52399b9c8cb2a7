//! Health check endpoints.
//!
//! These endpoints are used by load balancers and orchestration systems
//! to determine if the service is healthy and ready to receive traffic.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use marquee_dataset::DatasetStats;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,

    /// Service name.
    pub service: String,

    /// Service version.
    pub version: String,

    /// Current timestamp (ISO 8601).
    pub timestamp: String,

    /// Record counts of the loaded dataset (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<DatasetStats>,
}

impl HealthResponse {
    fn ok(dataset: Option<DatasetStats>) -> Self {
        Self {
            status: "ok".to_string(),
            service: "marquee-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
            dataset,
        }
    }
}

/// Create health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/livez", get(livez))
}

/// Basic health check - is the service running?
async fn healthz() -> impl IntoResponse {
    Json(HealthResponse::ok(None))
}

/// Readiness check.
///
/// The dataset is loaded before the listener binds, so a serving process is
/// always ready; the response reports what was loaded.
async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse::ok(Some(state.store().stats())))
}

/// Liveness check - minimal body for Kubernetes probes.
async fn livez() -> impl IntoResponse {
    StatusCode::OK
}
