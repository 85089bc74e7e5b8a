//! Collection entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named, owned grouping of papers, optionally nested under a parent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Collection {
    /// Unique collection identifier.
    pub id: Uuid,
    /// The collection owner.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional display color.
    pub color: Option<String>,
    /// Parent collection ID (null for root-level collections).
    pub parent_id: Option<Uuid>,
    /// When the collection was created.
    pub created_at: DateTime<Utc>,
    /// When the collection was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    /// Check if this is a root collection (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollection {
    /// The collection owner.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional display color.
    pub color: Option<String>,
    /// Parent collection (None for root).
    pub parent_id: Option<Uuid>,
}

/// Association between a collection and a paper, with per-membership notes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CollectionPaper {
    /// Unique association identifier.
    pub id: Uuid,
    /// The collection side of the association.
    pub collection_id: Uuid,
    /// The paper side of the association.
    pub paper_id: Uuid,
    /// Free-form notes about why the paper is in this collection.
    pub notes: Option<String>,
    /// Membership tags.
    pub tags: Vec<String>,
    /// When the paper was added.
    pub created_at: DateTime<Utc>,
}

/// A collection row joined with its paper-count aggregate.
///
/// This is the flat input shape consumed by [`super::tree::build_tree`].
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CollectionSummary {
    /// Collection ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional display color.
    pub color: Option<String>,
    /// Parent collection ID.
    pub parent_id: Option<Uuid>,
    /// Number of papers directly associated with this collection.
    pub paper_count: i64,
}
