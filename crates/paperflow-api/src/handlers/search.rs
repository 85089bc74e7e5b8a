//! External search handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use paperflow_search::types::SearchSource;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query.
    #[serde(default)]
    pub q: String,
    /// Provider selection (default: all).
    pub source: Option<String>,
    /// Per-provider result limit (default from config).
    pub limit: Option<u32>,
}

/// GET /api/search
pub async fn search(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let source = match params.source.as_deref() {
        Some(source) => source.parse::<SearchSource>()?,
        None => SearchSource::default(),
    };
    let limit = params
        .limit
        .unwrap_or(state.config.search.default_limit)
        .clamp(1, 100);

    let results = state
        .search_service
        .search(&auth, &params.q, source, limit)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "results": results.results, "total": results.total }
    })))
}
