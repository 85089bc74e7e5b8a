//! Citation generation handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use paperflow_cite::CitationStyle;
use paperflow_core::error::AppError;
use paperflow_service::citation::service::CitationOutput;

use crate::dto::request::GenerateCitationRequest;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/citations
pub async fn generate_citation(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<GenerateCitationRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let output = match req.format.as_deref() {
        Some("bibtex") => CitationOutput::Bibtex,
        Some("ris") => CitationOutput::Ris,
        Some(other) => {
            return Err(AppError::validation(format!(
                "Invalid export format: '{other}'. Expected 'bibtex' or 'ris'"
            ))
            .into());
        }
        None => {
            let style = match req.style.as_deref() {
                Some(style) => style.parse::<CitationStyle>()?,
                None => CitationStyle::default(),
            };
            CitationOutput::Styled(style)
        }
    };

    let citation = state
        .citation_service
        .generate(&auth, req.paper_id, output)
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": { "citation": citation } }),
    ))
}

/// GET /api/papers/{id}/citations
pub async fn citation_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let citations = state.citation_service.history(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": citations }),
    ))
}
