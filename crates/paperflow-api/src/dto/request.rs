//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use paperflow_core::error::AppError;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password (policy-checked separately).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    pub name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Citation generation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCitationRequest {
    /// The paper to cite.
    pub paper_id: Uuid,
    /// Citation style (default `apa`); ignored when `format` is set.
    pub style: Option<String>,
    /// Export format: `bibtex` or `ris`.
    pub format: Option<String>,
}

/// Summarization request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SummarizeRequest {
    /// Paper title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Abstract text.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Full text; truncated before being sent to the model.
    pub full_text: Option<String>,
}

/// Todo update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    /// New text.
    pub text: Option<String>,
    /// New completion flag.
    pub completed: Option<bool>,
}

/// Comment creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Comment text.
    #[validate(length(min = 1, message = "Comment is required"))]
    pub content: String,
}

/// Run `validator` rules and convert failures into a validation error.
pub fn validate<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid input: {e}")))
}
