//! Uploaded-PDF handling: storage, retrieval, and download URLs.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use paperflow_core::config::storage::StorageConfig;
use paperflow_core::error::AppError;
use paperflow_database::repositories::paper::PaperRepository;
use paperflow_entity::paper::model::Paper;
use paperflow_storage::provider::{ByteStream, StorageProvider};

use crate::context::RequestContext;

/// Manages PDF uploads for papers.
#[derive(Clone)]
pub struct PdfService {
    /// Paper repository.
    paper_repo: Arc<PaperRepository>,
    /// Backing object store.
    storage: Arc<dyn StorageProvider>,
    /// Storage limits and URL lifetime.
    config: StorageConfig,
}

impl PdfService {
    /// Creates a new PDF service.
    pub fn new(
        paper_repo: Arc<PaperRepository>,
        storage: Arc<dyn StorageProvider>,
        config: StorageConfig,
    ) -> Self {
        Self {
            paper_repo,
            storage,
            config,
        }
    }

    /// Storage key for a paper's uploaded PDF.
    fn object_path(user_id: Uuid, paper_id: Uuid) -> String {
        format!("papers/{user_id}/{paper_id}/document.pdf")
    }

    /// Stores an uploaded PDF and records its path on the paper.
    ///
    /// Re-uploading overwrites the previous document.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
        content_type: &str,
        data: Bytes,
    ) -> Result<Paper, AppError> {
        if content_type != "application/pdf" {
            return Err(AppError::validation("File must be a PDF"));
        }
        if data.is_empty() {
            return Err(AppError::validation("No file provided"));
        }
        if data.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File size must be less than {} bytes",
                self.config.max_upload_size_bytes
            )));
        }

        self.require_paper(ctx, paper_id).await?;

        let path = Self::object_path(ctx.user_id, paper_id);
        let size = data.len();
        self.storage.write(&path, data).await?;

        let paper = self
            .paper_repo
            .set_uploaded_pdf_path(paper_id, Some(&path))
            .await?;

        info!(
            user_id = %ctx.user_id,
            paper_id = %paper_id,
            path = %path,
            bytes = size,
            "PDF uploaded"
        );

        Ok(paper)
    }

    /// Opens a streaming read of a paper's uploaded PDF.
    pub async fn open(&self, ctx: &RequestContext, paper_id: Uuid) -> Result<ByteStream, AppError> {
        let paper = self.require_paper(ctx, paper_id).await?;
        let path = paper
            .uploaded_pdf_path
            .ok_or_else(|| AppError::not_found("No PDF available"))?;

        self.storage.read(&path).await
    }

    /// Returns a download URL for a paper's uploaded PDF.
    ///
    /// S3-backed storage mints a presigned URL; local storage falls back to
    /// the service's own streaming endpoint.
    pub async fn download_url(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
    ) -> Result<String, AppError> {
        let paper = self.require_paper(ctx, paper_id).await?;
        let path = paper
            .uploaded_pdf_path
            .ok_or_else(|| AppError::not_found("No PDF available"))?;

        let url = self
            .storage
            .download_url(&path, self.config.download_url_ttl_seconds)
            .await?;

        Ok(url.unwrap_or_else(|| format!("/api/papers/{paper_id}/pdf")))
    }

    /// Deletes a paper's uploaded PDF and clears its path.
    pub async fn delete(&self, ctx: &RequestContext, paper_id: Uuid) -> Result<(), AppError> {
        let paper = self.require_paper(ctx, paper_id).await?;
        let path = paper
            .uploaded_pdf_path
            .ok_or_else(|| AppError::not_found("No PDF to delete"))?;

        self.storage.delete(&path).await?;
        self.paper_repo
            .set_uploaded_pdf_path(paper_id, None)
            .await?;

        info!(
            user_id = %ctx.user_id,
            paper_id = %paper_id,
            path = %path,
            "PDF deleted"
        );

        Ok(())
    }

    async fn require_paper(
        &self,
        ctx: &RequestContext,
        paper_id: Uuid,
    ) -> Result<Paper, AppError> {
        self.paper_repo
            .find_by_id(ctx.user_id, paper_id)
            .await?
            .ok_or_else(|| AppError::not_found("Paper not found"))
    }
}

impl std::fmt::Debug for PdfService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfService")
            .field("provider", &self.storage.provider_type())
            .finish_non_exhaustive()
    }
}
