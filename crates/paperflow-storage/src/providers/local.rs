//! Local filesystem storage provider.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::StreamExt;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use paperflow_core::error::{AppError, ErrorKind};
use paperflow_core::result::AppResult;

use crate::provider::{ByteStream, StorageProvider};

/// Local filesystem storage provider.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Root directory for all stored files.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a relative key to an absolute path within the root.
    fn resolve(&self, path: &str) -> PathBuf {
        let clean = path.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn read(&self, path: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve(path);
        let file = fs::File::open(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open file: {path}"),
                    e,
                )
            }
        })?;

        let stream = ReaderStream::new(file);
        Ok(Box::pin(stream.map(|r| r.map(Bytes::from))))
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path);
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read file: {path}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path);
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Wrote file");
        Ok(())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path);
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(path, "Deleted file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::not_found(format!("File not found: {path}")))
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete file: {path}"),
                e,
            )),
        }
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        Ok(self.resolve(path).exists())
    }

    async fn download_url(
        &self,
        _path: &str,
        _expires_in_seconds: u64,
    ) -> AppResult<Option<String>> {
        // Local files have no direct URL; callers stream the bytes instead.
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_read_delete_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let key = "papers/u1/p1/document.pdf";
        provider
            .write(key, Bytes::from_static(b"%PDF-1.7 test"))
            .await
            .unwrap();

        assert!(provider.exists(key).await.unwrap());
        let data = provider.read_bytes(key).await.unwrap();
        assert_eq!(&data[..], b"%PDF-1.7 test");

        provider.delete(key).await.unwrap();
        assert!(!provider.exists(key).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalStorageProvider::new(dir.path().to_str().unwrap())
            .await
            .unwrap();

        let err = provider.read_bytes("nope.pdf").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
