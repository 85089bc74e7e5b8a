//! Annotation CRUD handlers, nested under papers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use paperflow_entity::annotation::model::UpdateAnnotation;
use paperflow_service::annotation::service::CreateAnnotationRequest;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/papers/{id}/annotations
pub async fn list_annotations(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let annotations = state.annotation_service.list_annotations(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": annotations }),
    ))
}

/// POST /api/papers/{id}/annotations
pub async fn create_annotation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateAnnotationRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let annotation = state
        .annotation_service
        .create_annotation(&auth, id, req)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": annotation }),
    ))
}

/// PATCH /api/papers/{id}/annotations/{annotation_id}
pub async fn update_annotation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, annotation_id)): Path<(Uuid, Uuid)>,
    Json(update): Json<UpdateAnnotation>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let annotation = state
        .annotation_service
        .update_annotation(&auth, id, annotation_id, update)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": annotation }),
    ))
}

/// DELETE /api/papers/{id}/annotations/{annotation_id}
pub async fn delete_annotation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, annotation_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .annotation_service
        .delete_annotation(&auth, id, annotation_id)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Annotation deleted" } }),
    ))
}
