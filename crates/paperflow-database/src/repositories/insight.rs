//! Insight repository: cards, todos, and comments.

use sqlx::PgPool;
use uuid::Uuid;

use paperflow_core::error::{AppError, ErrorKind};
use paperflow_core::result::AppResult;
use paperflow_entity::insight::card::{
    CreateInsightCard, InsightCard, InsightStatus, UpdateInsightCard,
};
use paperflow_entity::insight::comment::InsightComment;
use paperflow_entity::insight::todo::InsightTodo;

/// Repository for the insight kanban board.
#[derive(Debug, Clone)]
pub struct InsightRepository {
    pool: PgPool,
}

impl InsightRepository {
    /// Create a new insight repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a card by ID, scoped to its owner.
    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<InsightCard>> {
        sqlx::query_as::<_, InsightCard>(
            "SELECT * FROM insight_cards WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find insight", e))
    }

    /// List an owner's cards, newest first, optionally filtered by column.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        status: Option<InsightStatus>,
    ) -> AppResult<Vec<InsightCard>> {
        sqlx::query_as::<_, InsightCard>(
            "SELECT * FROM insight_cards WHERE user_id = $1 \
             AND ($2::insight_status IS NULL OR status = $2) \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list insights", e))
    }

    /// Create a new card.
    pub async fn create(&self, data: &CreateInsightCard) -> AppResult<InsightCard> {
        sqlx::query_as::<_, InsightCard>(
            "INSERT INTO insight_cards (user_id, paper_id, title, content, kind, status, tags) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.paper_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.kind)
        .bind(data.status)
        .bind(&data.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create insight", e))
    }

    /// Apply a partial update; absent fields keep their current values.
    pub async fn update(&self, id: Uuid, data: &UpdateInsightCard) -> AppResult<InsightCard> {
        sqlx::query_as::<_, InsightCard>(
            "UPDATE insight_cards SET \
                title = COALESCE($2, title), \
                content = COALESCE($3, content), \
                kind = COALESCE($4, kind), \
                status = COALESCE($5, status), \
                tags = COALESCE($6, tags), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.kind)
        .bind(data.status)
        .bind(&data.tags)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update insight", e))?
        .ok_or_else(|| AppError::not_found(format!("Insight {id} not found")))
    }

    /// Delete a card (todos and comments cascade). Returns false when
    /// nothing was removed.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM insight_cards WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete insight", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// List the cards linked to a paper.
    pub async fn list_for_paper(&self, user_id: Uuid, paper_id: Uuid) -> AppResult<Vec<InsightCard>> {
        sqlx::query_as::<_, InsightCard>(
            "SELECT * FROM insight_cards WHERE user_id = $1 AND paper_id = $2 \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .bind(paper_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list paper insights", e)
        })
    }

    /// Most recently created cards, for the activity feed.
    pub async fn recent_for_user(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<InsightCard>> {
        sqlx::query_as::<_, InsightCard>(
            "SELECT * FROM insight_cards WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent insights", e)
        })
    }

    // ── Todos ────────────────────────────────────────────────

    /// List a card's todos in creation order.
    pub async fn list_todos(&self, insight_id: Uuid) -> AppResult<Vec<InsightTodo>> {
        sqlx::query_as::<_, InsightTodo>(
            "SELECT * FROM insight_todos WHERE insight_id = $1 ORDER BY created_at ASC",
        )
        .bind(insight_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list todos", e))
    }

    /// Add a todo to a card.
    pub async fn create_todo(
        &self,
        insight_id: Uuid,
        text: &str,
        completed: bool,
    ) -> AppResult<InsightTodo> {
        sqlx::query_as::<_, InsightTodo>(
            "INSERT INTO insight_todos (insight_id, text, completed) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(insight_id)
        .bind(text)
        .bind(completed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create todo", e))
    }

    /// Update a todo's text and/or completion flag.
    pub async fn update_todo(
        &self,
        insight_id: Uuid,
        todo_id: Uuid,
        text: Option<&str>,
        completed: Option<bool>,
    ) -> AppResult<InsightTodo> {
        sqlx::query_as::<_, InsightTodo>(
            "UPDATE insight_todos SET \
                text = COALESCE($3, text), \
                completed = COALESCE($4, completed) \
             WHERE id = $1 AND insight_id = $2 RETURNING *",
        )
        .bind(todo_id)
        .bind(insight_id)
        .bind(text)
        .bind(completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update todo", e))?
        .ok_or_else(|| AppError::not_found(format!("Todo {todo_id} not found")))
    }

    /// Delete a todo. Returns false when nothing was removed.
    pub async fn delete_todo(&self, insight_id: Uuid, todo_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM insight_todos WHERE id = $1 AND insight_id = $2")
            .bind(todo_id)
            .bind(insight_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete todo", e))?;
        Ok(result.rows_affected() > 0)
    }

    // ── Comments ─────────────────────────────────────────────

    /// List a card's comments in posting order.
    pub async fn list_comments(&self, insight_id: Uuid) -> AppResult<Vec<InsightComment>> {
        sqlx::query_as::<_, InsightComment>(
            "SELECT * FROM insight_comments WHERE insight_id = $1 ORDER BY created_at ASC",
        )
        .bind(insight_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }

    /// Post a comment on a card.
    pub async fn create_comment(
        &self,
        insight_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> AppResult<InsightComment> {
        sqlx::query_as::<_, InsightComment>(
            "INSERT INTO insight_comments (insight_id, user_id, content) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(insight_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }

    /// Delete a comment. Returns false when nothing was removed.
    pub async fn delete_comment(&self, insight_id: Uuid, comment_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM insight_comments WHERE id = $1 AND insight_id = $2")
                .bind(comment_id)
                .bind(insight_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete comment", e)
                })?;
        Ok(result.rows_affected() > 0)
    }
}
