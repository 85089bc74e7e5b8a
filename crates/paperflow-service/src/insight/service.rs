//! Insight board CRUD: cards, todos, and comments.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use paperflow_core::error::AppError;
use paperflow_database::repositories::insight::InsightRepository;
use paperflow_database::repositories::paper::PaperRepository;
use paperflow_entity::insight::card::{
    CreateInsightCard, InsightCard, InsightKind, InsightStatus, UpdateInsightCard,
};
use paperflow_entity::insight::comment::InsightComment;
use paperflow_entity::insight::todo::InsightTodo;

use crate::context::RequestContext;

/// Manages the insight kanban board.
#[derive(Debug, Clone)]
pub struct InsightService {
    /// Insight repository.
    insight_repo: Arc<InsightRepository>,
    /// Paper repository, for paper-link validation.
    paper_repo: Arc<PaperRepository>,
}

/// Request to create an insight card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInsightRequest {
    /// Card title.
    pub title: String,
    /// Card body.
    #[serde(default)]
    pub content: String,
    /// Insight classification.
    #[serde(default, rename = "type")]
    pub kind: InsightKind,
    /// Board column.
    #[serde(default)]
    pub status: InsightStatus,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// The source paper, if any.
    pub paper_id: Option<Uuid>,
}

/// Request to add or update a todo on a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoRequest {
    /// Todo text.
    pub text: String,
    /// Initial completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl InsightService {
    /// Creates a new insight service.
    pub fn new(insight_repo: Arc<InsightRepository>, paper_repo: Arc<PaperRepository>) -> Self {
        Self {
            insight_repo,
            paper_repo,
        }
    }

    /// Lists the caller's cards, optionally filtered by board column.
    pub async fn list_insights(
        &self,
        ctx: &RequestContext,
        status: Option<InsightStatus>,
    ) -> Result<Vec<InsightCard>, AppError> {
        self.insight_repo.list_for_user(ctx.user_id, status).await
    }

    /// Creates a new insight card.
    pub async fn create_insight(
        &self,
        ctx: &RequestContext,
        req: CreateInsightRequest,
    ) -> Result<InsightCard, AppError> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Insight title cannot be empty"));
        }

        // A linked paper must exist and belong to the caller.
        if let Some(paper_id) = req.paper_id {
            self.paper_repo
                .find_by_id(ctx.user_id, paper_id)
                .await?
                .ok_or_else(|| AppError::not_found("Paper not found"))?;
        }

        let card = self
            .insight_repo
            .create(&CreateInsightCard {
                user_id: ctx.user_id,
                paper_id: req.paper_id,
                title: req.title,
                content: req.content,
                kind: req.kind,
                status: req.status,
                tags: req.tags,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            insight_id = %card.id,
            title = %card.title,
            "Insight created"
        );

        Ok(card)
    }

    /// Applies a partial update to a card (including kanban moves).
    pub async fn update_insight(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
        update: UpdateInsightCard,
    ) -> Result<InsightCard, AppError> {
        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Insight title cannot be empty"));
            }
        }

        self.require_insight(ctx, insight_id).await?;
        let card = self.insight_repo.update(insight_id, &update).await?;

        info!(user_id = %ctx.user_id, insight_id = %insight_id, "Insight updated");
        Ok(card)
    }

    /// Deletes a card along with its todos and comments.
    pub async fn delete_insight(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
    ) -> Result<(), AppError> {
        self.require_insight(ctx, insight_id).await?;
        self.insight_repo.delete(ctx.user_id, insight_id).await?;

        info!(user_id = %ctx.user_id, insight_id = %insight_id, "Insight deleted");
        Ok(())
    }

    // ── Todos ────────────────────────────────────────────────

    /// Lists a card's todos.
    pub async fn list_todos(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
    ) -> Result<Vec<InsightTodo>, AppError> {
        self.require_insight(ctx, insight_id).await?;
        self.insight_repo.list_todos(insight_id).await
    }

    /// Adds a todo to a card.
    pub async fn create_todo(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
        req: TodoRequest,
    ) -> Result<InsightTodo, AppError> {
        if req.text.trim().is_empty() {
            return Err(AppError::validation("Todo text cannot be empty"));
        }

        self.require_insight(ctx, insight_id).await?;
        self.insight_repo
            .create_todo(insight_id, &req.text, req.completed)
            .await
    }

    /// Updates a todo's text and/or completion flag.
    pub async fn update_todo(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
        todo_id: Uuid,
        text: Option<String>,
        completed: Option<bool>,
    ) -> Result<InsightTodo, AppError> {
        self.require_insight(ctx, insight_id).await?;
        self.insight_repo
            .update_todo(insight_id, todo_id, text.as_deref(), completed)
            .await
    }

    /// Deletes a todo.
    pub async fn delete_todo(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
        todo_id: Uuid,
    ) -> Result<(), AppError> {
        self.require_insight(ctx, insight_id).await?;
        let removed = self.insight_repo.delete_todo(insight_id, todo_id).await?;
        if !removed {
            return Err(AppError::not_found("Todo not found"));
        }
        Ok(())
    }

    // ── Comments ─────────────────────────────────────────────

    /// Lists a card's comments.
    pub async fn list_comments(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
    ) -> Result<Vec<InsightComment>, AppError> {
        self.require_insight(ctx, insight_id).await?;
        self.insight_repo.list_comments(insight_id).await
    }

    /// Posts a comment on a card.
    pub async fn create_comment(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
        content: String,
    ) -> Result<InsightComment, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Comment cannot be empty"));
        }

        self.require_insight(ctx, insight_id).await?;
        self.insight_repo
            .create_comment(insight_id, ctx.user_id, &content)
            .await
    }

    /// Deletes a comment.
    pub async fn delete_comment(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), AppError> {
        self.require_insight(ctx, insight_id).await?;
        let removed = self
            .insight_repo
            .delete_comment(insight_id, comment_id)
            .await?;
        if !removed {
            return Err(AppError::not_found("Comment not found"));
        }
        Ok(())
    }

    async fn require_insight(
        &self,
        ctx: &RequestContext,
        insight_id: Uuid,
    ) -> Result<InsightCard, AppError> {
        self.insight_repo
            .find_by_id(ctx.user_id, insight_id)
            .await?
            .ok_or_else(|| AppError::not_found("Insight not found"))
    }
}
