//! # paperflow-entity
//!
//! Domain entity models for Paperflow: users, papers, collections and their
//! tree projection, annotations, insight cards, and citations.

pub mod annotation;
pub mod citation;
pub mod collection;
pub mod insight;
pub mod paper;
pub mod user;
