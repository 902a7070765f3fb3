//! Health Check Handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::domain::gateways::DatabaseDriver;
use crate::infrastructure::driven_adapters::database::PostgresDriver;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET /health - Liveness of the service and its database
///
/// # Responses
///
/// * 200 OK - Database answered the liveness probe
/// * 503 Service Unavailable - Database probe failed
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    PostgresDriver.ping(&state.pool).await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
