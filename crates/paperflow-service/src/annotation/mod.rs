//! Annotation services.

pub mod service;

pub use service::AnnotationService;
