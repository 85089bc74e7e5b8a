//! AI summarizer configuration.

use serde::{Deserialize, Serialize};

/// Settings for the OpenAI-compatible summarization backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// API key. When empty the summarizer returns a placeholder response.
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the chat-completions API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens for a summary response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Characters of full text passed to the model before truncation.
    #[serde(default = "default_max_full_text")]
    pub max_full_text_chars: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            max_full_text_chars: default_max_full_text(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_max_full_text() -> usize {
    4000
}
