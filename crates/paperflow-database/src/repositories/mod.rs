//! Concrete repository implementations, one per entity.

pub mod annotation;
pub mod citation;
pub mod collection;
pub mod insight;
pub mod paper;
pub mod user;
