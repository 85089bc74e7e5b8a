//! # paperflow-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all Paperflow entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::create_pool;
