//! # paperflow-core
//!
//! Core crate for Paperflow. Contains configuration schemas, pagination
//! types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Paperflow crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
