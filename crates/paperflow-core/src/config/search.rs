//! External bibliographic search configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external search providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Semantic Scholar API key (optional; raises rate limits).
    #[serde(default)]
    pub semantic_scholar_api_key: String,
    /// Contact email sent to OpenAlex in the User-Agent (polite pool).
    #[serde(default = "default_openalex_email")]
    pub openalex_email: String,
    /// Per-request timeout for provider calls in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    /// Default number of results requested from each provider.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            semantic_scholar_api_key: String::new(),
            openalex_email: default_openalex_email(),
            request_timeout_seconds: default_timeout(),
            default_limit: default_limit(),
        }
    }
}

fn default_openalex_email() -> String {
    "contact@example.com".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_limit() -> u32 {
    10
}
