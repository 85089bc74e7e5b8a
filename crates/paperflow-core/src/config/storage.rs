//! PDF storage provider configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage provider to use: `"local"` or `"s3"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Maximum PDF upload size in bytes (default 50 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Lifetime of generated download URLs in seconds.
    #[serde(default = "default_url_ttl")]
    pub download_url_ttl_seconds: u64,
    /// Local filesystem storage configuration.
    #[serde(default)]
    pub local: LocalStorageConfig,
    /// S3-compatible storage configuration.
    #[serde(default)]
    pub s3: S3StorageConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            max_upload_size_bytes: default_max_upload(),
            download_url_ttl_seconds: default_url_ttl(),
            local: LocalStorageConfig::default(),
            s3: S3StorageConfig::default(),
        }
    }
}

/// Local filesystem storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root path for local PDF storage.
    #[serde(default = "default_local_root")]
    pub root_path: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct S3StorageConfig {
    /// S3 endpoint URL (for non-AWS services like MinIO).
    #[serde(default)]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3 bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_max_upload() -> u64 {
    52_428_800 // 50 MB
}

fn default_url_ttl() -> u64 {
    3600
}

fn default_local_root() -> String {
    "./data/pdfs".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}
