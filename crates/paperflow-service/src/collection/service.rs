//! Collection CRUD with hierarchy invariants.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use paperflow_core::error::AppError;
use paperflow_database::repositories::collection::CollectionRepository;
use paperflow_database::repositories::paper::PaperRepository;
use paperflow_entity::collection::model::{Collection, CollectionPaper, CreateCollection};
use paperflow_entity::paper::model::Paper;

use crate::context::RequestContext;

/// Manages collection CRUD operations and paper associations.
#[derive(Debug, Clone)]
pub struct CollectionService {
    /// Collection repository.
    collection_repo: Arc<CollectionRepository>,
    /// Paper repository, for association ownership checks.
    paper_repo: Arc<PaperRepository>,
}

/// Request to create a new collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollectionRequest {
    /// Collection name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional display color.
    pub color: Option<String>,
    /// Parent collection ID (None for root-level).
    pub parent_id: Option<Uuid>,
}

/// Request to update a collection. Absent fields are left untouched;
/// `parent_id` moves the collection under a new parent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCollectionRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New display color.
    pub color: Option<String>,
    /// New parent collection.
    pub parent_id: Option<Uuid>,
}

/// Request to associate a paper with a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPaperRequest {
    /// The paper to add.
    pub paper_id: Uuid,
    /// Membership notes.
    pub notes: Option<String>,
    /// Membership tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A collection with its papers and direct children, for detail views.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionDetail {
    /// The collection itself.
    #[serde(flatten)]
    pub collection: Collection,
    /// Papers associated with this collection.
    pub papers: Vec<Paper>,
    /// Direct child collections.
    pub children: Vec<Collection>,
}

impl CollectionService {
    /// Creates a new collection service.
    pub fn new(
        collection_repo: Arc<CollectionRepository>,
        paper_repo: Arc<PaperRepository>,
    ) -> Self {
        Self {
            collection_repo,
            paper_repo,
        }
    }

    /// Lists all of the caller's collections, newest first.
    pub async fn list_collections(&self, ctx: &RequestContext) -> Result<Vec<Collection>, AppError> {
        self.collection_repo.list_for_user(ctx.user_id).await
    }

    /// Gets a collection with its papers and direct children.
    pub async fn get_collection(
        &self,
        ctx: &RequestContext,
        collection_id: Uuid,
    ) -> Result<CollectionDetail, AppError> {
        let collection = self.require_collection(ctx, collection_id).await?;
        let papers = self.collection_repo.papers(collection_id).await?;
        let children = self.collection_repo.find_children(collection_id).await?;

        Ok(CollectionDetail {
            collection,
            papers,
            children,
        })
    }

    /// Creates a new collection.
    pub async fn create_collection(
        &self,
        ctx: &RequestContext,
        req: CreateCollectionRequest,
    ) -> Result<Collection, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Collection name cannot be empty"));
        }

        // The parent must exist and belong to the same owner.
        if let Some(parent_id) = req.parent_id {
            self.require_collection(ctx, parent_id).await?;
        }

        let collection = self
            .collection_repo
            .create(&CreateCollection {
                user_id: ctx.user_id,
                name: name.to_string(),
                description: req.description,
                color: req.color,
                parent_id: req.parent_id,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            collection_id = %collection.id,
            name = %collection.name,
            "Collection created"
        );

        Ok(collection)
    }

    /// Updates a collection's fields and/or moves it under a new parent.
    pub async fn update_collection(
        &self,
        ctx: &RequestContext,
        collection_id: Uuid,
        req: UpdateCollectionRequest,
    ) -> Result<Collection, AppError> {
        let mut collection = self.require_collection(ctx, collection_id).await?;

        if let Some(name) = req.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::validation("Collection name cannot be empty"));
            }
            collection.name = name;
        }
        if let Some(description) = req.description {
            collection.description = Some(description);
        }
        if let Some(color) = req.color {
            collection.color = Some(color);
        }

        if let Some(parent_id) = req.parent_id {
            if parent_id == collection_id {
                return Err(AppError::validation(
                    "Cannot make a collection its own parent",
                ));
            }

            self.require_collection(ctx, parent_id).await?;

            // Reject a parent that sits inside this collection's subtree.
            let parent_ancestors = self.collection_repo.ancestor_ids(parent_id).await?;
            if parent_ancestors.contains(&collection_id) {
                return Err(AppError::validation(
                    "Cannot move a collection under one of its descendants",
                ));
            }

            collection.parent_id = Some(parent_id);
        }

        let updated = self.collection_repo.update(&collection).await?;

        info!(
            user_id = %ctx.user_id,
            collection_id = %collection_id,
            "Collection updated"
        );

        Ok(updated)
    }

    /// Deletes a collection and its entire descendant subtree.
    pub async fn delete_collection(
        &self,
        ctx: &RequestContext,
        collection_id: Uuid,
    ) -> Result<(), AppError> {
        let collection = self.require_collection(ctx, collection_id).await?;

        let removed = self
            .collection_repo
            .delete_subtree(ctx.user_id, collection_id)
            .await?;

        info!(
            user_id = %ctx.user_id,
            collection_id = %collection_id,
            name = %collection.name,
            removed,
            "Collection deleted"
        );

        Ok(())
    }

    /// Associates a paper with a collection.
    ///
    /// A second identical call is rejected with a conflict; the association
    /// is not idempotent.
    pub async fn add_paper(
        &self,
        ctx: &RequestContext,
        collection_id: Uuid,
        req: AddPaperRequest,
    ) -> Result<CollectionPaper, AppError> {
        self.require_collection(ctx, collection_id).await?;

        self.paper_repo
            .find_by_id(ctx.user_id, req.paper_id)
            .await?
            .ok_or_else(|| AppError::not_found("Paper not found"))?;

        if self
            .collection_repo
            .find_association(collection_id, req.paper_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Paper already in collection"));
        }

        // A concurrent insert can still slip past the check above; the
        // unique constraint maps to the same conflict error.
        let association = self
            .collection_repo
            .add_paper(
                collection_id,
                req.paper_id,
                req.notes.as_deref(),
                &req.tags,
            )
            .await?;

        info!(
            user_id = %ctx.user_id,
            collection_id = %collection_id,
            paper_id = %req.paper_id,
            "Paper added to collection"
        );

        Ok(association)
    }

    /// Removes a paper from a collection.
    pub async fn remove_paper(
        &self,
        ctx: &RequestContext,
        collection_id: Uuid,
        paper_id: Uuid,
    ) -> Result<(), AppError> {
        self.require_collection(ctx, collection_id).await?;

        let removed = self
            .collection_repo
            .remove_paper(collection_id, paper_id)
            .await?;
        if !removed {
            return Err(AppError::not_found("Paper is not in this collection"));
        }

        info!(
            user_id = %ctx.user_id,
            collection_id = %collection_id,
            paper_id = %paper_id,
            "Paper removed from collection"
        );

        Ok(())
    }

    /// Loads a collection owned by the caller, or fails with `NotFound`.
    async fn require_collection(
        &self,
        ctx: &RequestContext,
        collection_id: Uuid,
    ) -> Result<Collection, AppError> {
        self.collection_repo
            .find_by_id(ctx.user_id, collection_id)
            .await?
            .ok_or_else(|| AppError::not_found("Collection not found"))
    }
}
