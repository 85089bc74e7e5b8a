//! AI summarization handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{SummarizeRequest, validate};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/ai/summarize
pub async fn summarize(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate(&req)?;

    let analysis = state
        .summarizer
        .summarize(
            &req.title,
            req.abstract_text.as_deref(),
            req.full_text.as_deref(),
        )
        .await;

    Ok(Json(
        serde_json::json!({ "success": true, "data": analysis }),
    ))
}
