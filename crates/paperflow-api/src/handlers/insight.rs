//! Insight board handlers: cards with nested todos and comments.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use paperflow_entity::insight::card::{InsightStatus, UpdateInsightCard};
use paperflow_service::insight::service::{CreateInsightRequest, TodoRequest};

use crate::dto::request::{CreateCommentRequest, UpdateTodoRequest, validate};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Query parameters for listing insights.
#[derive(Debug, Deserialize)]
pub struct ListInsightsParams {
    /// Optional kanban column filter.
    pub status: Option<InsightStatus>,
}

/// GET /api/insights
pub async fn list_insights(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ListInsightsParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let insights = state
        .insight_service
        .list_insights(&auth, params.status)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": insights }),
    ))
}

/// POST /api/insights
pub async fn create_insight(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateInsightRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let insight = state.insight_service.create_insight(&auth, req).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": insight })))
}

/// PATCH /api/insights/{id}
pub async fn update_insight(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateInsightCard>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let insight = state
        .insight_service
        .update_insight(&auth, id, update)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": insight })))
}

/// DELETE /api/insights/{id}
pub async fn delete_insight(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.insight_service.delete_insight(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Insight deleted" } }),
    ))
}

// ── Todos ────────────────────────────────────────────────────

/// GET /api/insights/{id}/todos
pub async fn list_todos(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let todos = state.insight_service.list_todos(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": todos })))
}

/// POST /api/insights/{id}/todos
pub async fn create_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<TodoRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let todo = state.insight_service.create_todo(&auth, id, req).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": todo })))
}

/// PATCH /api/insights/{id}/todos/{todo_id}
pub async fn update_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, todo_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let todo = state
        .insight_service
        .update_todo(&auth, id, todo_id, req.text, req.completed)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": todo })))
}

/// DELETE /api/insights/{id}/todos/{todo_id}
pub async fn delete_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, todo_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.insight_service.delete_todo(&auth, id, todo_id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Todo deleted" } }),
    ))
}

// ── Comments ─────────────────────────────────────────────────

/// GET /api/insights/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let comments = state.insight_service.list_comments(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": comments }),
    ))
}

/// POST /api/insights/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate(&req)?;
    let comment = state
        .insight_service
        .create_comment(&auth, id, req.content)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": comment })))
}

/// DELETE /api/insights/{id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, comment_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .insight_service
        .delete_comment(&auth, id, comment_id)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Comment deleted" } }),
    ))
}
