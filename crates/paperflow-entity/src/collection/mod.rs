//! Collection domain entities and the hierarchy projection.

pub mod model;
pub mod tree;

pub use model::{Collection, CollectionPaper, CollectionSummary, CreateCollection};
pub use tree::{CollectionNode, build_tree};
