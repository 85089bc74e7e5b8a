//! Collection management and tree services.

pub mod service;
pub mod tree;

pub use service::CollectionService;
pub use tree::TreeService;
