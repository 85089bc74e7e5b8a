//! Collection repository: hierarchy queries and paper associations.

use sqlx::PgPool;
use uuid::Uuid;

use paperflow_core::error::{AppError, ErrorKind};
use paperflow_core::result::AppResult;
use paperflow_entity::collection::model::{
    Collection, CollectionPaper, CollectionSummary, CreateCollection,
};
use paperflow_entity::paper::model::Paper;

/// Repository for collection CRUD, tree queries, and paper associations.
#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: PgPool,
}

impl CollectionRepository {
    /// Create a new collection repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a collection by ID, scoped to its owner.
    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Option<Collection>> {
        sqlx::query_as::<_, Collection>(
            "SELECT * FROM collections WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find collection", e))
    }

    /// List all of an owner's collections, newest first.
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Collection>> {
        sqlx::query_as::<_, Collection>(
            "SELECT * FROM collections WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list collections", e))
    }

    /// List all of an owner's collections with paper counts, sorted by name.
    ///
    /// This is the flat input for the tree builder; alphabetical input order
    /// is what makes tree children alphabetical.
    pub async fn list_summaries(&self, user_id: Uuid) -> AppResult<Vec<CollectionSummary>> {
        sqlx::query_as::<_, CollectionSummary>(
            "SELECT c.id, c.name, c.description, c.color, c.parent_id, \
                    COUNT(cp.id) AS paper_count \
             FROM collections c \
             LEFT JOIN collection_papers cp ON cp.collection_id = c.id \
             WHERE c.user_id = $1 \
             GROUP BY c.id \
             ORDER BY c.name ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list collection summaries", e)
        })
    }

    /// List direct children of a collection.
    pub async fn find_children(&self, parent_id: Uuid) -> AppResult<Vec<Collection>> {
        sqlx::query_as::<_, Collection>(
            "SELECT * FROM collections WHERE parent_id = $1 ORDER BY name ASC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    /// Get the ancestor chain of a collection (self first, root last).
    pub async fn ancestor_ids(&self, id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT id, parent_id, 0 AS depth FROM collections WHERE id = $1 \
                UNION ALL \
                SELECT c.id, c.parent_id, a.depth + 1 \
                FROM collections c \
                INNER JOIN ancestors a ON c.id = a.parent_id \
                WHERE a.depth < 64 \
             ) SELECT id FROM ancestors ORDER BY depth ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ancestors", e))
    }

    /// Create a new collection.
    pub async fn create(&self, data: &CreateCollection) -> AppResult<Collection> {
        sqlx::query_as::<_, Collection>(
            "INSERT INTO collections (user_id, name, description, color, parent_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.color)
        .bind(data.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create collection", e))
    }

    /// Persist new field values for a collection.
    pub async fn update(&self, collection: &Collection) -> AppResult<Collection> {
        sqlx::query_as::<_, Collection>(
            "UPDATE collections \
             SET name = $2, description = $3, color = $4, parent_id = $5, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(collection.id)
        .bind(&collection.name)
        .bind(&collection.description)
        .bind(&collection.color)
        .bind(collection.parent_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update collection", e))?
        .ok_or_else(|| AppError::not_found(format!("Collection {} not found", collection.id)))
    }

    /// Delete a collection and its entire descendant subtree.
    ///
    /// The cascade is explicit: descendant ids are collected with a
    /// recursive CTE and both the paper associations and the collection rows
    /// are removed in one transaction, so the behavior does not depend on
    /// foreign-key cascade configuration. Returns the number of collections
    /// removed (0 when the root did not exist).
    pub async fn delete_subtree(&self, user_id: Uuid, id: Uuid) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        const SUBTREE: &str = "WITH RECURSIVE subtree AS ( \
                SELECT id FROM collections WHERE id = $1 AND user_id = $2 \
                UNION ALL \
                SELECT c.id FROM collections c INNER JOIN subtree s ON c.parent_id = s.id \
             ) SELECT id FROM subtree";

        sqlx::query(&format!(
            "DELETE FROM collection_papers WHERE collection_id IN ({SUBTREE})"
        ))
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete associations", e)
        })?;

        let result = sqlx::query(&format!("DELETE FROM collections WHERE id IN ({SUBTREE})"))
            .bind(id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete collections", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(result.rows_affected())
    }

    /// List the papers associated with a collection.
    pub async fn papers(&self, collection_id: Uuid) -> AppResult<Vec<Paper>> {
        sqlx::query_as::<_, Paper>(
            "SELECT p.* FROM papers p \
             INNER JOIN collection_papers cp ON cp.paper_id = p.id \
             WHERE cp.collection_id = $1 \
             ORDER BY cp.created_at DESC",
        )
        .bind(collection_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list collection papers", e)
        })
    }

    /// Find an existing collection/paper association.
    pub async fn find_association(
        &self,
        collection_id: Uuid,
        paper_id: Uuid,
    ) -> AppResult<Option<CollectionPaper>> {
        sqlx::query_as::<_, CollectionPaper>(
            "SELECT * FROM collection_papers WHERE collection_id = $1 AND paper_id = $2",
        )
        .bind(collection_id)
        .bind(paper_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find association", e))
    }

    /// Associate a paper with a collection.
    ///
    /// The unique constraint on (collection_id, paper_id) is the source of
    /// correctness under concurrent inserts; a violation maps to `Conflict`.
    pub async fn add_paper(
        &self,
        collection_id: Uuid,
        paper_id: Uuid,
        notes: Option<&str>,
        tags: &[String],
    ) -> AppResult<CollectionPaper> {
        sqlx::query_as::<_, CollectionPaper>(
            "INSERT INTO collection_papers (collection_id, paper_id, notes, tags) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(collection_id)
        .bind(paper_id)
        .bind(notes)
        .bind(tags)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("collection_papers_collection_id_paper_id_key") =>
            {
                AppError::conflict("Paper already in collection")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to add paper", e),
        })
    }

    /// Remove a paper from a collection. Returns false when no association
    /// existed.
    pub async fn remove_paper(&self, collection_id: Uuid, paper_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM collection_papers WHERE collection_id = $1 AND paper_id = $2",
        )
        .bind(collection_id)
        .bind(paper_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to remove paper", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count collections recently created by an owner, for the activity feed.
    pub async fn recent_for_user(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<Collection>> {
        sqlx::query_as::<_, Collection>(
            "SELECT * FROM collections WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent collections", e)
        })
    }
}
