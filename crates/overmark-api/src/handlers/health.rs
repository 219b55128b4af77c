//! Health check handler and response type.

use axum::{response::IntoResponse, Json};

use crate::constants::{SERVICE_NAME, SERVICE_VERSION};

#[derive(serde::Serialize)]
pub(crate) struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Liveness probe - process is running and can serve requests.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
    })
}
