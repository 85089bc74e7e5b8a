//! Insight comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A discussion comment attached to an insight card.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InsightComment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The parent insight card.
    pub insight_id: Uuid,
    /// The comment author.
    pub user_id: Uuid,
    /// Comment text.
    pub content: String,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}
