//! Citation domain entities.

pub mod model;

pub use model::Citation;
