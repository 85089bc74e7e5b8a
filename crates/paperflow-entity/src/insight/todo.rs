//! Insight todo entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A checklist item attached to an insight card.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InsightTodo {
    /// Unique todo identifier.
    pub id: Uuid,
    /// The parent insight card.
    pub insight_id: Uuid,
    /// Todo text.
    pub text: String,
    /// Whether the item is done.
    pub completed: bool,
    /// When the todo was created.
    pub created_at: DateTime<Utc>,
}
