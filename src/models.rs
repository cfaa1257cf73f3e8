//! Data models for API responses

use serde::Serialize;

/// Liveness payload returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const OK: Self = Self { status: "ok" };
}
