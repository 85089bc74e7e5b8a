//! Paper CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use paperflow_entity::paper::model::UpdatePaper;
use paperflow_service::paper::service::CreatePaperRequest;

use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/papers
pub async fn list_papers(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = state
        .paper_service
        .list_papers(&auth, params.into_page_request())
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}

/// GET /api/papers/{id}
pub async fn get_paper(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let detail = state.paper_service.get_paper(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": detail })))
}

/// POST /api/papers
pub async fn create_paper(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePaperRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let paper = state.paper_service.create_paper(&auth, req).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": paper })))
}

/// PATCH /api/papers/{id}
pub async fn update_paper(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdatePaper>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let paper = state.paper_service.update_paper(&auth, id, update).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": paper })))
}

/// DELETE /api/papers/{id}
pub async fn delete_paper(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.paper_service.delete_paper(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Paper deleted" } }),
    ))
}
