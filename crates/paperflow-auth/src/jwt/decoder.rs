//! JWT token decoding and validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use paperflow_core::config::auth::AuthConfig;
use paperflow_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Decodes and validates signed JWT tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation parameters (algorithm, expiry).
    validation: Validation,
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Decodes a token and verifies it is an access token.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token)?;
        if claims.token_type != TokenType::Access {
            return Err(AppError::authentication("Expected an access token"));
        }
        Ok(claims)
    }

    /// Decodes a token and verifies it is a refresh token.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token)?;
        if claims.token_type != TokenType::Refresh {
            return Err(AppError::authentication("Expected a refresh token"));
        }
        Ok(claims)
    }

    /// Decodes and validates a token signature + expiry.
    fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::authentication(format!("Invalid token: {e}")))
    }
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_roundtrip_access_token() {
        let encoder = JwtEncoder::new(&config());
        let decoder = JwtDecoder::new(&config());
        let user_id = Uuid::new_v4();

        let pair = encoder
            .generate_token_pair(user_id, "me@example.com")
            .unwrap();

        let claims = decoder.decode_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.email, "me@example.com");
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let encoder = JwtEncoder::new(&config());
        let decoder = JwtDecoder::new(&config());

        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), "me@example.com")
            .unwrap();

        assert!(decoder.decode_access_token(&pair.refresh_token).is_err());
        assert!(decoder.decode_refresh_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&config());
        let other = AuthConfig {
            jwt_secret: "other-secret".to_string(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), "me@example.com")
            .unwrap();

        assert!(decoder.decode_access_token(&pair.access_token).is_err());
    }
}
