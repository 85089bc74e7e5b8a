//! # paperflow-storage
//!
//! Object storage for uploaded PDFs. Supports the local filesystem and
//! S3-compatible stores behind a common [`provider::StorageProvider`] trait.

pub mod provider;
pub mod providers;

pub use provider::{ByteStream, StorageProvider};
pub use providers::from_config;
