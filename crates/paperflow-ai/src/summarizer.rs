//! Paper analysis via chat completions.

use serde::{Deserialize, Serialize};
use tracing::warn;

use paperflow_core::config::ai::AiConfig;

/// Structured analysis of a paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperAnalysis {
    /// Two-to-three sentence summary.
    pub summary: String,
    /// Key methodology used.
    pub methodology: Option<String>,
    /// Main findings.
    pub findings: Option<String>,
    /// Limitations.
    pub limitations: Option<String>,
}

/// Summarizes papers through an OpenAI-compatible backend.
#[derive(Debug, Clone)]
pub struct Summarizer {
    http: reqwest::Client,
    config: AiConfig,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

const SYSTEM_PROMPT: &str = "You are a research assistant that analyzes academic papers. \
     Provide clear, concise analysis.";

impl Summarizer {
    /// Create a new summarizer from configuration.
    pub fn new(http: reqwest::Client, config: AiConfig) -> Self {
        Self { http, config }
    }

    /// Whether a backend API key is configured.
    pub fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    /// Analyze a paper from its title, abstract, and optional full text.
    ///
    /// Never fails: configuration or backend problems produce a placeholder
    /// analysis the caller can surface as-is.
    pub async fn summarize(
        &self,
        title: &str,
        abstract_text: Option<&str>,
        full_text: Option<&str>,
    ) -> PaperAnalysis {
        if !self.is_configured() {
            return PaperAnalysis {
                summary: "AI summarization is not configured. Set an API key to enable it."
                    .to_string(),
                methodology: Some("N/A".to_string()),
                findings: Some("N/A".to_string()),
                limitations: Some("N/A".to_string()),
            };
        }

        let prompt = self.build_prompt(title, abstract_text, full_text);

        match self.complete(&prompt).await {
            Ok(content) => parse_analysis(&content),
            Err(e) => {
                warn!(error = %e, "Summarization request failed");
                PaperAnalysis {
                    summary: "Summarization is temporarily unavailable.".to_string(),
                    methodology: None,
                    findings: None,
                    limitations: None,
                }
            }
        }
    }

    fn build_prompt(
        &self,
        title: &str,
        abstract_text: Option<&str>,
        full_text: Option<&str>,
    ) -> String {
        let mut prompt = format!(
            "Analyze this research paper and provide:\n\
             1. A concise summary (2-3 sentences)\n\
             2. Key methodology used\n\
             3. Main findings\n\
             4. Limitations\n\n\
             Paper: {title}\n"
        );

        if let Some(abstract_text) = abstract_text {
            prompt.push_str(&format!("\nAbstract: {abstract_text}\n"));
        }

        if let Some(full_text) = full_text {
            let truncated: String = full_text
                .chars()
                .take(self.config.max_full_text_chars)
                .collect();
            prompt.push_str(&format!("\nFull text: {truncated}\n"));
        }

        prompt.push_str(
            "\nFormat your response as JSON with keys: summary, methodology, findings, limitations",
        );
        prompt
    }

    async fn complete(&self, prompt: &str) -> Result<String, paperflow_core::AppError> {
        use paperflow_core::AppError;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.7,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http
            .post(format!(
                "{}/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Chat request: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::external_service(format!("Chat status: {e}")))?
            .json::<ChatResponse>()
            .await
            .map_err(|e| AppError::external_service(format!("Chat decode: {e}")))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::external_service("Empty chat completion"))
    }
}

/// Parse the model's response, accepting either the requested JSON shape or
/// raw prose (which becomes the summary).
fn parse_analysis(content: &str) -> PaperAnalysis {
    let stripped = strip_code_fence(content);

    match serde_json::from_str::<PaperAnalysis>(stripped) {
        Ok(analysis) => analysis,
        Err(_) => PaperAnalysis {
            summary: content.trim().to_string(),
            methodology: Some("Unable to extract".to_string()),
            findings: Some("Unable to extract".to_string()),
            limitations: Some("Unable to extract".to_string()),
        },
    }
}

/// Strip a surrounding Markdown code fence, if present.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches('\n')
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structured_json() {
        let analysis = parse_analysis(
            r#"{"summary": "S", "methodology": "M", "findings": "F", "limitations": "L"}"#,
        );
        assert_eq!(analysis.summary, "S");
        assert_eq!(analysis.methodology.as_deref(), Some("M"));
    }

    #[test]
    fn test_parse_fenced_json() {
        let analysis = parse_analysis(
            "```json\n{\"summary\": \"S\", \"methodology\": null, \
             \"findings\": null, \"limitations\": null}\n```",
        );
        assert_eq!(analysis.summary, "S");
    }

    #[test]
    fn test_parse_prose_falls_back_to_summary() {
        let analysis = parse_analysis("This paper is about transformers.");
        assert_eq!(analysis.summary, "This paper is about transformers.");
        assert_eq!(analysis.methodology.as_deref(), Some("Unable to extract"));
    }
}
