//! The storage provider abstraction.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use paperflow_core::result::AppResult;

/// A stream of byte chunks read from a stored object.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Backend-agnostic object storage operations for PDF files.
///
/// Paths are forward-slash-separated keys relative to the provider root,
/// e.g. `papers/{user_id}/{paper_id}/document.pdf`.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Short provider identifier, e.g. `"local"` or `"s3"`.
    fn provider_type(&self) -> &str;

    /// Check that the backend is reachable and usable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Open a streaming read of the object at `path`.
    async fn read(&self, path: &str) -> AppResult<ByteStream>;

    /// Read the whole object at `path` into memory.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Write `data` to `path`, overwriting any existing object.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete the object at `path`.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Whether an object exists at `path`.
    async fn exists(&self, path: &str) -> AppResult<bool>;

    /// A time-limited direct download URL for `path`, when the backend can
    /// mint one (S3 presigned GET). `None` means the caller must serve the
    /// bytes itself.
    async fn download_url(&self, path: &str, expires_in_seconds: u64) -> AppResult<Option<String>>;
}
