//! PDF upload, streaming, and URL handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::Response;
use bytes::Bytes;
use uuid::Uuid;

use paperflow_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/papers/{id}/pdf
///
/// Multipart upload; the file goes in a `pdf` field.
pub async fn upload_pdf(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("pdf") {
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
            file = Some((content_type, data));
            break;
        }
    }

    let (content_type, data) =
        file.ok_or_else(|| AppError::validation("No file provided"))?;

    let paper = state
        .pdf_service
        .upload(&auth, id, &content_type, data)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "uploaded_pdf_path": paper.uploaded_pdf_path, "paper": paper }
    })))
}

/// GET /api/papers/{id}/pdf
///
/// Streams the stored PDF bytes.
pub async fn download_pdf(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let stream = state.pdf_service.open(&auth, id).await?;

    let response = Response::builder()
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            "inline; filename=\"document.pdf\"",
        )
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Failed to build response: {e}")))?;

    Ok(response)
}

/// GET /api/papers/{id}/pdf-url
pub async fn pdf_url(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let url = state.pdf_service.download_url(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "url": url } }),
    ))
}

/// DELETE /api/papers/{id}/pdf
pub async fn delete_pdf(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.pdf_service.delete(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "PDF deleted" } }),
    ))
}
