//! Annotation CRUD, ownership-checked through the annotated paper.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use paperflow_core::error::AppError;
use paperflow_database::repositories::annotation::AnnotationRepository;
use paperflow_database::repositories::paper::PaperRepository;
use paperflow_entity::annotation::kind::AnnotationKind;
use paperflow_entity::annotation::model::{Annotation, CreateAnnotation, UpdateAnnotation};

use crate::context::RequestContext;

/// Manages PDF annotations.
#[derive(Debug, Clone)]
pub struct AnnotationService {
    /// Annotation repository.
    annotation_repo: Arc<AnnotationRepository>,
    /// Paper repository, for ownership checks.
    paper_repo: Arc<PaperRepository>,
}

/// Request to create an annotation on a paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnnotationRequest {
    /// Note/comment text.
    pub content: String,
    /// The selected text, for selection-anchored marks.
    pub highlight: Option<String>,
    /// Display color.
    #[serde(default = "default_color")]
    pub color: String,
    /// 1-based page number.
    pub page_number: Option<i32>,
    /// Horizontal anchor as a percentage of page width.
    pub position_x: Option<f64>,
    /// Vertical anchor as a percentage of page height.
    pub position_y: Option<f64>,
    /// Selection start offset within the page text.
    pub start_offset: Option<i32>,
    /// Selection end offset within the page text.
    pub end_offset: Option<i32>,
    /// Annotation category.
    #[serde(default)]
    pub kind: AnnotationKind,
    /// Serialized stroke data for drawing annotations.
    pub drawing_data: Option<String>,
}

fn default_color() -> String {
    "yellow".to_string()
}

impl AnnotationService {
    /// Creates a new annotation service.
    pub fn new(
        annotation_repo: Arc<AnnotationRepository>,
        paper_repo: Arc<PaperRepository>,
    ) -> Self {
        Self {
            annotation_repo,
            paper_repo,
        }
    }

    /// Lists a paper's annotations, ordered by page then creation time.
    pub async fn list_annotations(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
    ) -> Result<Vec<Annotation>, AppError> {
        self.require_paper(ctx, paper_id).await?;
        self.annotation_repo
            .list_for_paper(ctx.user_id, paper_id)
            .await
    }

    /// Creates a new annotation on a paper.
    pub async fn create_annotation(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
        req: CreateAnnotationRequest,
    ) -> Result<Annotation, AppError> {
        self.require_paper(ctx, paper_id).await?;

        let annotation = self
            .annotation_repo
            .create(&CreateAnnotation {
                paper_id,
                user_id: ctx.user_id,
                content: req.content,
                highlight: req.highlight,
                color: req.color,
                page_number: req.page_number,
                position_x: req.position_x,
                position_y: req.position_y,
                start_offset: req.start_offset,
                end_offset: req.end_offset,
                kind: req.kind,
                drawing_data: req.drawing_data,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            paper_id = %paper_id,
            annotation_id = %annotation.id,
            kind = %annotation.kind,
            "Annotation created"
        );

        Ok(annotation)
    }

    /// Applies a partial update to an annotation.
    pub async fn update_annotation(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
        annotation_id: Uuid,
        update: UpdateAnnotation,
    ) -> Result<Annotation, AppError> {
        self.require_annotation(ctx, paper_id, annotation_id).await?;
        let annotation = self.annotation_repo.update(annotation_id, &update).await?;

        info!(
            user_id = %ctx.user_id,
            annotation_id = %annotation_id,
            "Annotation updated"
        );

        Ok(annotation)
    }

    /// Deletes an annotation.
    pub async fn delete_annotation(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
        annotation_id: Uuid,
    ) -> Result<(), AppError> {
        self.require_annotation(ctx, paper_id, annotation_id).await?;
        self.annotation_repo.delete(annotation_id).await?;

        info!(
            user_id = %ctx.user_id,
            annotation_id = %annotation_id,
            "Annotation deleted"
        );

        Ok(())
    }

    async fn require_paper(&self, ctx: &RequestContext, paper_id: Uuid) -> Result<(), AppError> {
        self.paper_repo
            .find_by_id(ctx.user_id, paper_id)
            .await?
            .ok_or_else(|| AppError::not_found("Paper not found"))?;
        Ok(())
    }

    async fn require_annotation(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
        annotation_id: Uuid,
    ) -> Result<Annotation, AppError> {
        self.annotation_repo
            .find_by_id(ctx.user_id, paper_id, annotation_id)
            .await?
            .ok_or_else(|| AppError::not_found("Annotation not found"))
    }
}
