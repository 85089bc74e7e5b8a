//! S3-compatible object storage provider.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream as S3ByteStream;
use bytes::Bytes;
use futures::stream;
use tracing::{debug, info};

use paperflow_core::config::storage::S3StorageConfig;
use paperflow_core::error::{AppError, ErrorKind};
use paperflow_core::result::AppResult;

use crate::provider::{ByteStream, StorageProvider};

/// S3-compatible storage provider.
#[derive(Debug, Clone)]
pub struct S3StorageProvider {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3StorageProvider {
    /// Create a new S3 storage provider from configuration.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("S3 bucket name is required"));
        }

        info!(
            endpoint = %config.endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 storage provider"
        );

        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "paperflow",
        );

        let mut builder = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .force_path_style(true);

        if !config.endpoint.is_empty() {
            builder = builder.endpoint_url(&config.endpoint);
        }

        Ok(Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        })
    }

    fn map_get_error(path: &str, e: impl std::error::Error + Send + Sync + 'static) -> AppError {
        let text = e.to_string();
        if text.contains("NoSuchKey") {
            AppError::not_found(format!("File not found: {path}"))
        } else {
            AppError::with_source(ErrorKind::Storage, format!("S3 read failed: {path}"), e)
        }
    }
}

#[async_trait]
impl StorageProvider for S3StorageProvider {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map(|_| true)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "S3 health check failed", e)
            })
    }

    async fn read(&self, path: &str) -> AppResult<ByteStream> {
        // The SDK body is not a std Stream; buffer and wrap.
        let data = self.read_bytes(path).await?;
        Ok(Box::pin(stream::iter(vec![Ok(data)])))
    }

    async fn read_bytes(&self, path: &str) -> AppResult<Bytes> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| Self::map_get_error(path, e))?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, format!("S3 body read failed: {path}"), e)
            })?
            .into_bytes();

        Ok(data)
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let len = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(path)
            .content_type("application/pdf")
            .body(S3ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, format!("S3 write failed: {path}"), e)
            })?;

        debug!(path, bytes = len, "Wrote object");
        Ok(())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, format!("S3 delete failed: {path}"), e)
            })?;

        debug!(path, "Deleted object");
        Ok(())
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.to_string().contains("NotFound") => Ok(false),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("S3 head failed: {path}"),
                e,
            )),
        }
    }

    async fn download_url(&self, path: &str, expires_in_seconds: u64) -> AppResult<Option<String>> {
        let presigning = PresigningConfig::expires_in(Duration::from_secs(expires_in_seconds))
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Invalid presign expiry", e)
            })?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(path)
            .presigned(presigning)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Storage, format!("S3 presign failed: {path}"), e)
            })?;

        Ok(Some(request.uri().to_string()))
    }
}
