//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Public view of a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl From<paperflow_entity::user::User> for UserResponse {
    fn from(user: paperflow_entity::user::User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// Login/refresh response carrying the token pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiry.
    pub access_expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Basic health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Build version.
    pub version: String,
}

/// Detailed health response with dependency probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Service status.
    pub status: String,
    /// Database probe result.
    pub database: String,
    /// Storage provider in use.
    pub storage: String,
}
