//! Paper entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ReadingStatus;

/// A saved academic paper.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Paper {
    /// Unique paper identifier.
    pub id: Uuid,
    /// The paper owner.
    pub user_id: Uuid,
    /// Paper title.
    pub title: String,
    /// Author names in publication order.
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
    /// Citation count reported by the source the paper was imported from.
    pub citation_count: i32,
    /// External open-access PDF link.
    pub pdf_url: Option<String>,
    /// Object-storage key of an uploaded PDF, when one exists.
    pub uploaded_pdf_path: Option<String>,
    /// AI-generated summary.
    pub summary: Option<String>,
    /// AI-extracted methodology notes.
    pub methodology: Option<String>,
    /// AI-extracted findings.
    pub findings: Option<String>,
    /// AI-extracted limitations.
    pub limitations: Option<String>,
    /// Reading workflow status.
    pub status: ReadingStatus,
    /// When the paper was saved.
    pub created_at: DateTime<Utc>,
    /// When the paper was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Paper {
    /// Whether a PDF has been uploaded for this paper.
    pub fn has_uploaded_pdf(&self) -> bool {
        self.uploaded_pdf_path.is_some()
    }
}

/// Data required to save a new paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaper {
    /// The paper owner.
    pub user_id: Uuid,
    /// Paper title.
    pub title: String,
    /// Author names.
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
    pub citation_count: i32,
    /// External open-access PDF link.
    pub pdf_url: Option<String>,
}

/// Partial update of a paper; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePaper {
    /// New title.
    pub title: Option<String>,
    /// New author list.
    pub authors: Option<Vec<String>>,
    /// New abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    /// New publication date.
    pub publication_date: Option<NaiveDate>,
    /// New venue.
    pub venue: Option<String>,
    /// New DOI.
    pub doi: Option<String>,
    /// New citation count.
    pub citation_count: Option<i32>,
    /// New external PDF link.
    pub pdf_url: Option<String>,
    /// New AI summary.
    pub summary: Option<String>,
    /// New methodology notes.
    pub methodology: Option<String>,
    /// New findings.
    pub findings: Option<String>,
    /// New limitations.
    pub limitations: Option<String>,
    /// New reading status.
    pub status: Option<ReadingStatus>,
}
