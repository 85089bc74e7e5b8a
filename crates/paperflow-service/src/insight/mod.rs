//! Insight board services.

pub mod service;

pub use service::InsightService;
