//! Annotation repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use paperflow_core::error::{AppError, ErrorKind};
use paperflow_core::result::AppResult;
use paperflow_entity::annotation::model::{Annotation, CreateAnnotation, UpdateAnnotation};

/// Repository for PDF annotations.
#[derive(Debug, Clone)]
pub struct AnnotationRepository {
    pool: PgPool,
}

impl AnnotationRepository {
    /// Create a new annotation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an annotation by ID within a paper, scoped to its owner.
    pub async fn find_by_id(
        &self,
        user_id: Uuid,
        paper_id: Uuid,
        id: Uuid,
    ) -> AppResult<Option<Annotation>> {
        sqlx::query_as::<_, Annotation>(
            "SELECT * FROM annotations WHERE id = $1 AND paper_id = $2 AND user_id = $3",
        )
        .bind(id)
        .bind(paper_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find annotation", e))
    }

    /// List a paper's annotations ordered by page, then creation time.
    pub async fn list_for_paper(&self, user_id: Uuid, paper_id: Uuid) -> AppResult<Vec<Annotation>> {
        sqlx::query_as::<_, Annotation>(
            "SELECT * FROM annotations WHERE paper_id = $1 AND user_id = $2 \
             ORDER BY page_number ASC NULLS LAST, created_at ASC",
        )
        .bind(paper_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list annotations", e))
    }

    /// Create a new annotation.
    pub async fn create(&self, data: &CreateAnnotation) -> AppResult<Annotation> {
        sqlx::query_as::<_, Annotation>(
            "INSERT INTO annotations (paper_id, user_id, content, highlight, color, \
                                      page_number, position_x, position_y, \
                                      start_offset, end_offset, kind, drawing_data) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) RETURNING *",
        )
        .bind(data.paper_id)
        .bind(data.user_id)
        .bind(&data.content)
        .bind(&data.highlight)
        .bind(&data.color)
        .bind(data.page_number)
        .bind(data.position_x)
        .bind(data.position_y)
        .bind(data.start_offset)
        .bind(data.end_offset)
        .bind(data.kind)
        .bind(&data.drawing_data)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create annotation", e))
    }

    /// Apply a partial update; absent fields keep their current values.
    pub async fn update(&self, id: Uuid, data: &UpdateAnnotation) -> AppResult<Annotation> {
        sqlx::query_as::<_, Annotation>(
            "UPDATE annotations SET \
                content = COALESCE($2, content), \
                highlight = COALESCE($3, highlight), \
                color = COALESCE($4, color), \
                page_number = COALESCE($5, page_number), \
                position_x = COALESCE($6, position_x), \
                position_y = COALESCE($7, position_y), \
                start_offset = COALESCE($8, start_offset), \
                end_offset = COALESCE($9, end_offset), \
                kind = COALESCE($10, kind), \
                drawing_data = COALESCE($11, drawing_data), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.content)
        .bind(&data.highlight)
        .bind(&data.color)
        .bind(data.page_number)
        .bind(data.position_x)
        .bind(data.position_y)
        .bind(data.start_offset)
        .bind(data.end_offset)
        .bind(data.kind)
        .bind(&data.drawing_data)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update annotation", e))?
        .ok_or_else(|| AppError::not_found(format!("Annotation {id} not found")))
    }

    /// Delete an annotation. Returns false when nothing was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM annotations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete annotation", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
