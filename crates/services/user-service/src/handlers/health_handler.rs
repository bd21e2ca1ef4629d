//! Health check handlers.

use axum::{response::Json, routing::get, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use domain::{HEALTH_STATUS_HEALTHY, SERVICE_NAME};

use super::method_not_allowed;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    /// RFC 3339 UTC timestamp
    #[schema(example = "2024-06-01T12:00:00Z")]
    pub timestamp: String,
    #[schema(example = "golang-app")]
    pub service: String,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check).fallback(method_not_allowed))
}

/// Liveness probe. Never touches the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS_HEALTHY.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        service: SERVICE_NAME.to_string(),
    })
}
