//! HTTP handlers

use axum::Json;

use crate::models::HealthResponse;

/// Health check endpoint
///
/// Liveness only: it answers whenever the process is up and touches no
/// configuration or downstream service.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::OK)
}
