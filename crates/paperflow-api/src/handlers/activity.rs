//! Activity feed handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Query parameters for the activity feed.
#[derive(Debug, Deserialize)]
pub struct ActivityParams {
    /// Maximum entries to return.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

/// GET /api/activity
pub async fn activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ActivityParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let limit = params.limit.clamp(1, 100);
    let entries = state.activity_service.feed(&auth, limit).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": entries }),
    ))
}
