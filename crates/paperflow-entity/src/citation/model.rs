//! Citation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A formatted citation string generated for a paper.
///
/// Styled citations are persisted for history; BibTeX/RIS exports are
/// generated on the fly and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Citation {
    /// Unique citation identifier.
    pub id: Uuid,
    /// The cited paper.
    pub paper_id: Uuid,
    /// Style name the citation was formatted with.
    pub style: String,
    /// The formatted citation string.
    pub formatted: String,
    /// When the citation was generated.
    pub created_at: DateTime<Utc>,
}
