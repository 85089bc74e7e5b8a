//! Paper CRUD operations.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use paperflow_core::error::AppError;
use paperflow_core::types::pagination::{PageRequest, PageResponse};
use paperflow_database::repositories::annotation::AnnotationRepository;
use paperflow_database::repositories::insight::InsightRepository;
use paperflow_database::repositories::paper::PaperRepository;
use paperflow_entity::annotation::model::Annotation;
use paperflow_entity::collection::model::Collection;
use paperflow_entity::insight::card::InsightCard;
use paperflow_entity::paper::model::{CreatePaper, Paper, UpdatePaper};

use crate::context::RequestContext;

/// Manages saved papers.
#[derive(Debug, Clone)]
pub struct PaperService {
    /// Paper repository.
    paper_repo: Arc<PaperRepository>,
    /// Annotation repository, for detail views.
    annotation_repo: Arc<AnnotationRepository>,
    /// Insight repository, for detail views.
    insight_repo: Arc<InsightRepository>,
}

/// Request to save a new paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaperRequest {
    /// Paper title.
    pub title: String,
    /// Author names.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Abstract text.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Publication date.
    pub publication_date: Option<NaiveDate>,
    /// Journal or conference name.
    pub venue: Option<String>,
    /// Digital Object Identifier.
    pub doi: Option<String>,
    /// Citation count at import time.
    #[serde(default)]
    pub citation_count: i32,
    /// External open-access PDF link.
    pub pdf_url: Option<String>,
}

/// A paper with its related records, for detail views.
#[derive(Debug, Clone, Serialize)]
pub struct PaperDetail {
    /// The paper itself.
    #[serde(flatten)]
    pub paper: Paper,
    /// Collections the paper belongs to.
    pub collections: Vec<Collection>,
    /// The paper's annotations.
    pub annotations: Vec<Annotation>,
    /// Insights derived from the paper.
    pub insights: Vec<InsightCard>,
}

impl PaperService {
    /// Creates a new paper service.
    pub fn new(
        paper_repo: Arc<PaperRepository>,
        annotation_repo: Arc<AnnotationRepository>,
        insight_repo: Arc<InsightRepository>,
    ) -> Self {
        Self {
            paper_repo,
            annotation_repo,
            insight_repo,
        }
    }

    /// Lists the caller's papers, newest first.
    pub async fn list_papers(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Paper>, AppError> {
        self.paper_repo.list_for_user(ctx.user_id, &page).await
    }

    /// Gets a paper with its collections, annotations, and insights.
    pub async fn get_paper(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
    ) -> Result<PaperDetail, AppError> {
        let paper = self.require_paper(ctx, paper_id).await?;

        let collections = self.paper_repo.collections(paper_id).await?;
        let annotations = self
            .annotation_repo
            .list_for_paper(ctx.user_id, paper_id)
            .await?;
        let insights = self
            .insight_repo
            .list_for_paper(ctx.user_id, paper_id)
            .await?;

        Ok(PaperDetail {
            paper,
            collections,
            annotations,
            insights,
        })
    }

    /// Saves a new paper.
    pub async fn create_paper(
        &self,
        ctx: &RequestContext,
        req: CreatePaperRequest,
    ) -> Result<Paper, AppError> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Paper title cannot be empty"));
        }

        let paper = self
            .paper_repo
            .create(&CreatePaper {
                user_id: ctx.user_id,
                title: req.title,
                authors: req.authors,
                abstract_text: req.abstract_text,
                publication_date: req.publication_date,
                venue: req.venue,
                doi: req.doi,
                citation_count: req.citation_count,
                pdf_url: req.pdf_url,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            paper_id = %paper.id,
            title = %paper.title,
            "Paper saved"
        );

        Ok(paper)
    }

    /// Applies a partial update to a paper.
    pub async fn update_paper(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
        update: UpdatePaper,
    ) -> Result<Paper, AppError> {
        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("Paper title cannot be empty"));
            }
        }

        self.require_paper(ctx, paper_id).await?;
        let paper = self.paper_repo.update(ctx.user_id, paper_id, &update).await?;

        info!(user_id = %ctx.user_id, paper_id = %paper_id, "Paper updated");
        Ok(paper)
    }

    /// Deletes a paper. Annotations, associations, and citations go with it.
    pub async fn delete_paper(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
    ) -> Result<(), AppError> {
        let paper = self.require_paper(ctx, paper_id).await?;

        self.paper_repo.delete(ctx.user_id, paper_id).await?;

        info!(
            user_id = %ctx.user_id,
            paper_id = %paper_id,
            title = %paper.title,
            "Paper deleted"
        );

        Ok(())
    }

    /// Loads a paper owned by the caller, or fails with `NotFound`.
    pub(crate) async fn require_paper(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
    ) -> Result<Paper, AppError> {
        self.paper_repo
            .find_by_id(ctx.user_id, paper_id)
            .await?
            .ok_or_else(|| AppError::not_found("Paper not found"))
    }
}
