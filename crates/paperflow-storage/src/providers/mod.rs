//! Concrete storage provider implementations and selection.

pub mod local;
#[cfg(feature = "s3")]
pub mod s3;

use std::sync::Arc;

use paperflow_core::config::storage::StorageConfig;
use paperflow_core::error::AppError;
use paperflow_core::result::AppResult;

use crate::provider::StorageProvider;

/// Build the storage provider named by configuration.
pub async fn from_config(config: &StorageConfig) -> AppResult<Arc<dyn StorageProvider>> {
    match config.provider.as_str() {
        "local" => {
            let provider = local::LocalStorageProvider::new(&config.local.root_path).await?;
            Ok(Arc::new(provider))
        }
        #[cfg(feature = "s3")]
        "s3" => {
            let provider = s3::S3StorageProvider::new(&config.s3).await?;
            Ok(Arc::new(provider))
        }
        #[cfg(not(feature = "s3"))]
        "s3" => Err(AppError::configuration(
            "S3 storage requires building with the `s3` feature",
        )),
        other => Err(AppError::configuration(format!(
            "Unknown storage provider: '{other}'"
        ))),
    }
}
