//! # paperflow-search
//!
//! Thin HTTP clients for the external bibliographic APIs (Semantic Scholar,
//! OpenAlex, Crossref), field normalization into a common [`types::SearchHit`],
//! and cross-source de-duplication.
//!
//! Every client fails closed: a transport or decode error yields an empty
//! result set, never a retry.

pub mod aggregate;
pub mod crossref;
pub mod openalex;
pub mod semantic_scholar;
pub mod types;

pub use aggregate::dedupe_hits;
pub use types::{SearchHit, SearchSource};
