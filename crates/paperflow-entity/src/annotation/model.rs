//! Annotation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::AnnotationKind;

/// A user-created mark anchored to a page of an uploaded PDF.
///
/// Position fields are percentages of the rendered page, so overlays scale
/// with the viewport instead of pixel coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Annotation {
    /// Unique annotation identifier.
    pub id: Uuid,
    /// The annotated paper.
    pub paper_id: Uuid,
    /// The annotation owner.
    pub user_id: Uuid,
    /// Note/comment text attached to the mark.
    pub content: String,
    /// The selected text, when the mark anchors to a selection.
    pub highlight: Option<String>,
    /// Display color.
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
    pub kind: AnnotationKind,
    /// Serialized stroke data for drawing annotations.
    pub drawing_data: Option<String>,
    /// When the annotation was created.
    pub created_at: DateTime<Utc>,
    /// When the annotation was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAnnotation {
    /// The annotated paper.
    pub paper_id: Uuid,
    /// The annotation owner.
    pub user_id: Uuid,
    /// Note/comment text.
    pub content: String,
    /// Selected text.
    pub highlight: Option<String>,
    /// Display color.
    pub color: String,
    /// 1-based page number.
    pub page_number: Option<i32>,
    /// Horizontal anchor percentage.
    pub position_x: Option<f64>,
    /// Vertical anchor percentage.
    pub position_y: Option<f64>,
    /// Selection start offset.
    pub start_offset: Option<i32>,
    /// Selection end offset.
    pub end_offset: Option<i32>,
    /// Annotation category.
    pub kind: AnnotationKind,
    /// Serialized stroke data.
    pub drawing_data: Option<String>,
}

/// Partial update of an annotation; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAnnotation {
    /// New note/comment text.
    pub content: Option<String>,
    /// New selected text.
    pub highlight: Option<String>,
    /// New display color.
    pub color: Option<String>,
    /// New page number.
    pub page_number: Option<i32>,
    /// New horizontal anchor percentage.
    pub position_x: Option<f64>,
    /// New vertical anchor percentage.
    pub position_y: Option<f64>,
    /// New selection start offset.
    pub start_offset: Option<i32>,
    /// New selection end offset.
    pub end_offset: Option<i32>,
    /// New annotation category.
    pub kind: Option<AnnotationKind>,
    /// New stroke data.
    pub drawing_data: Option<String>,
}
