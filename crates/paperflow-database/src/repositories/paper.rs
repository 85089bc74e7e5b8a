//! Paper repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use paperflow_core::error::{AppError, ErrorKind};
use paperflow_core::result::AppResult;
use paperflow_core::types::pagination::{PageRequest, PageResponse};
use paperflow_entity::paper::model::{CreatePaper, Paper, UpdatePaper};

/// Repository for saved papers.
#[derive(Debug, Clone)]
pub struct PaperRepository {
    pool: PgPool,
}

impl PaperRepository {
    /// Create a new paper repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a paper by ID, scoped to its owner.
    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<Paper>> {
        sqlx::query_as::<_, Paper>("SELECT * FROM papers WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find paper", e))
    }

    /// List an owner's papers, newest first, paginated.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Paper>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM papers WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count papers", e))?;

        let papers = sqlx::query_as::<_, Paper>(
            "SELECT * FROM papers WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list papers", e))?;

        Ok(PageResponse::new(
            papers,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Save a new paper.
    pub async fn create(&self, data: &CreatePaper) -> AppResult<Paper> {
        sqlx::query_as::<_, Paper>(
            "INSERT INTO papers (user_id, title, authors, abstract_text, publication_date, \
                                 venue, doi, citation_count, pdf_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(&data.authors)
        .bind(&data.abstract_text)
        .bind(data.publication_date)
        .bind(&data.venue)
        .bind(&data.doi)
        .bind(data.citation_count)
        .bind(&data.pdf_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create paper", e))
    }

    /// Apply a partial update; absent fields keep their current values.
    pub async fn update(&self, user_id: Uuid, id: Uuid, data: &UpdatePaper) -> AppResult<Paper> {
        sqlx::query_as::<_, Paper>(
            "UPDATE papers SET \
                title = COALESCE($3, title), \
                authors = COALESCE($4, authors), \
                abstract_text = COALESCE($5, abstract_text), \
                publication_date = COALESCE($6, publication_date), \
                venue = COALESCE($7, venue), \
                doi = COALESCE($8, doi), \
                citation_count = COALESCE($9, citation_count), \
                pdf_url = COALESCE($10, pdf_url), \
                summary = COALESCE($11, summary), \
                methodology = COALESCE($12, methodology), \
                findings = COALESCE($13, findings), \
                limitations = COALESCE($14, limitations), \
                status = COALESCE($15, status), \
                updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(&data.title)
        .bind(&data.authors)
        .bind(&data.abstract_text)
        .bind(data.publication_date)
        .bind(&data.venue)
        .bind(&data.doi)
        .bind(data.citation_count)
        .bind(&data.pdf_url)
        .bind(&data.summary)
        .bind(&data.methodology)
        .bind(&data.findings)
        .bind(&data.limitations)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update paper", e))?
        .ok_or_else(|| AppError::not_found(format!("Paper {id} not found")))
    }

    /// Set or clear the uploaded PDF path.
    pub async fn set_uploaded_pdf_path(
        &self,
        id: Uuid,
        path: Option<&str>,
    ) -> AppResult<Paper> {
        sqlx::query_as::<_, Paper>(
            "UPDATE papers SET uploaded_pdf_path = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update PDF path", e))?
        .ok_or_else(|| AppError::not_found(format!("Paper {id} not found")))
    }

    /// Delete a paper. Returns false when nothing was removed.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM papers WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete paper", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// List the collections a paper belongs to.
    pub async fn collections(&self, paper_id: Uuid) -> AppResult<Vec<paperflow_entity::collection::Collection>> {
        sqlx::query_as::<_, paperflow_entity::collection::Collection>(
            "SELECT c.* FROM collections c \
             INNER JOIN collection_papers cp ON cp.collection_id = c.id \
             WHERE cp.paper_id = $1 ORDER BY c.name ASC",
        )
        .bind(paper_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list paper collections", e)
        })
    }

    /// Most recently saved papers, for the activity feed.
    pub async fn recent_for_user(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<Paper>> {
        sqlx::query_as::<_, Paper>(
            "SELECT * FROM papers WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent papers", e)
        })
    }

    /// Total papers owned by a user.
    pub async fn count_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM papers WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count papers", e))?;
        Ok(count as u64)
    }
}
