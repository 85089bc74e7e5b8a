//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/detailed
pub async fn detailed_health(State(state): State<AppState>) -> Json<ApiResponse<DetailedHealthResponse>> {
    let database = match paperflow_database::connection::health_check(&state.db_pool).await {
        Ok(true) => "connected",
        _ => "unavailable",
    };

    Json(ApiResponse::ok(DetailedHealthResponse {
        status: "ok".to_string(),
        database: database.to_string(),
        storage: state.storage.provider_type().to_string(),
    }))
}
