//! Insight card entity model and its classification enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// What kind of observation an insight captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "insight_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// An empirical result worth remembering.
    Finding,
    /// A method or technique.
    Methodology,
    /// A weakness or caveat.
    Limitation,
    /// A follow-up research idea.
    Idea,
}

impl Default for InsightKind {
    fn default() -> Self {
        Self::Finding
    }
}

/// Kanban column an insight card sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "insight_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum InsightStatus {
    /// Not yet started.
    Backlog,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    Review,
    /// Finished.
    Done,
}

impl Default for InsightStatus {
    fn default() -> Self {
        Self::Backlog
    }
}

/// A note tracked on the insight kanban board.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InsightCard {
    /// Unique card identifier.
    pub id: Uuid,
    /// The card owner.
    pub user_id: Uuid,
    /// The paper the insight came from, if any.
    pub paper_id: Option<Uuid>,
    /// Card title.
    pub title: String,
    /// Card body.
    pub content: String,
    /// Insight classification.
    pub kind: InsightKind,
    /// Board column.
    pub status: InsightStatus,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// When the card was created.
    pub created_at: DateTime<Utc>,
    /// When the card was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new insight card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInsightCard {
    /// The card owner.
    pub user_id: Uuid,
    /// The source paper, if any.
    pub paper_id: Option<Uuid>,
    /// Card title.
    pub title: String,
    /// Card body.
    pub content: String,
    /// Insight classification.
    pub kind: InsightKind,
    /// Board column.
    pub status: InsightStatus,
    /// Free-form tags.
    pub tags: Vec<String>,
}

/// Partial update of an insight card; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateInsightCard {
    /// New title.
    pub title: Option<String>,
    /// New body.
    pub content: Option<String>,
    /// New classification.
    pub kind: Option<InsightKind>,
    /// New board column.
    pub status: Option<InsightStatus>,
    /// New tags.
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_kebab_case() {
        let json = serde_json::to_string(&InsightStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let parsed: InsightStatus = serde_json::from_str("\"backlog\"").unwrap();
        assert_eq!(parsed, InsightStatus::Backlog);
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&InsightKind::Methodology).unwrap();
        assert_eq!(json, "\"methodology\"");
    }
}
