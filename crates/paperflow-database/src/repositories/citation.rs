//! Citation repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use paperflow_core::error::{AppError, ErrorKind};
use paperflow_core::result::AppResult;
use paperflow_entity::citation::model::Citation;

/// Repository for generated citation history.
#[derive(Debug, Clone)]
pub struct CitationRepository {
    pool: PgPool,
}

impl CitationRepository {
    /// Create a new citation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a formatted citation.
    pub async fn create(
        &self,
        paper_id: Uuid,
        style: &str,
        formatted: &str,
    ) -> AppResult<Citation> {
        sqlx::query_as::<_, Citation>(
            "INSERT INTO citations (paper_id, style, formatted) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(paper_id)
        .bind(style)
        .bind(formatted)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create citation", e))
    }

    /// List the citations generated for a paper, newest first.
    pub async fn list_for_paper(&self, paper_id: Uuid) -> AppResult<Vec<Citation>> {
        sqlx::query_as::<_, Citation>(
            "SELECT * FROM citations WHERE paper_id = $1 ORDER BY created_at DESC",
        )
        .bind(paper_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list citations", e))
    }
}
