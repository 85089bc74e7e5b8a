//! Registration, login, and token handlers.

use axum::Json;
use axum::extract::State;
use tracing::info;

use paperflow_core::error::AppError;
use paperflow_entity::user::model::CreateUser;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest, validate};
use crate::dto::response::{ApiResponse, AuthResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    validate(&req)?;
    state.password_validator.validate(&req.password)?;

    if state.user_repo.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::conflict("Email already exists").into());
    }

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let user = state
        .user_repo
        .create(&CreateUser {
            email: req.email,
            password_hash,
            name: req.name,
        })
        .await?;

    info!(user_id = %user.id, email = %user.email, "User registered");

    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    validate(&req)?;

    let user = state
        .user_repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

    let valid = state
        .password_hasher
        .verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(AppError::authentication("Invalid email or password").into());
    }

    let pair = state.jwt_encoder.generate_token_pair(user.id, &user.email)?;

    info!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        access_expires_at: pair.access_expires_at,
        user: user.into(),
    }))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let claims = state.jwt_decoder.decode_refresh_token(&req.refresh_token)?;

    // The account must still exist for the refresh to succeed.
    let user = state
        .user_repo
        .find_by_id(claims.user_id())
        .await?
        .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

    let pair = state.jwt_encoder.generate_token_pair(user.id, &user.email)?;

    Ok(Json(AuthResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        access_expires_at: pair.access_expires_at,
        user: user.into(),
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_repo
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ApiResponse::ok(user.into())))
}
