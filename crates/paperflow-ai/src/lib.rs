//! # paperflow-ai
//!
//! Paper summarization through an OpenAI-compatible chat-completions API.
//! Fails closed: when no API key is configured, or the backend errors, a
//! placeholder analysis is returned instead of retrying.

pub mod summarizer;

pub use summarizer::{PaperAnalysis, Summarizer};
