//! Collection tree retrieval.

use std::sync::Arc;

use paperflow_core::error::AppError;
use paperflow_database::repositories::collection::CollectionRepository;
use paperflow_entity::collection::tree::{CollectionNode, build_tree};

use crate::context::RequestContext;

/// Builds the caller's collection forest for display and picker UIs.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Collection repository.
    collection_repo: Arc<CollectionRepository>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(collection_repo: Arc<CollectionRepository>) -> Self {
        Self { collection_repo }
    }

    /// Builds the complete collection forest for the caller.
    ///
    /// The repository returns rows sorted by name, which is what makes
    /// children alphabetical in the built tree.
    pub async fn get_tree(&self, ctx: &RequestContext) -> Result<Vec<CollectionNode>, AppError> {
        let summaries = self.collection_repo.list_summaries(ctx.user_id).await?;
        Ok(build_tree(summaries))
    }
}
