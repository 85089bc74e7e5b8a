//! Activity feed services.

pub mod service;

pub use service::ActivityService;
