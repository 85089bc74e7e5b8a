//! Collection CRUD, tree, and association handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use paperflow_service::collection::service::{
    AddPaperRequest, CreateCollectionRequest, UpdateCollectionRequest,
};

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/collections
pub async fn list_collections(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let collections = state.collection_service.list_collections(&auth).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": collections }),
    ))
}

/// GET /api/collections/tree
pub async fn get_tree(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let tree = state.tree_service.get_tree(&auth).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": tree })))
}

/// GET /api/collections/{id}
pub async fn get_collection(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let detail = state.collection_service.get_collection(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": detail })))
}

/// POST /api/collections
pub async fn create_collection(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCollectionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let collection = state.collection_service.create_collection(&auth, req).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": collection }),
    ))
}

/// PATCH /api/collections/{id}
pub async fn update_collection(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCollectionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let collection = state
        .collection_service
        .update_collection(&auth, id, req)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": collection }),
    ))
}

/// DELETE /api/collections/{id}
pub async fn delete_collection(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.collection_service.delete_collection(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Collection deleted" } }),
    ))
}

/// POST /api/collections/{id}/papers
pub async fn add_paper(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AddPaperRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let association = state.collection_service.add_paper(&auth, id, req).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": association }),
    ))
}

/// DELETE /api/collections/{id}/papers/{paper_id}
pub async fn remove_paper(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, paper_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .collection_service
        .remove_paper(&auth, id, paper_id)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Paper removed" } }),
    ))
}
