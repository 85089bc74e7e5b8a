//! Citation services.

pub mod service;

pub use service::CitationService;
