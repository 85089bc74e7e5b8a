//! Password policy enforcement for new passwords.

use paperflow_core::config::auth::AuthConfig;
use paperflow_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Two {
            return Err(AppError::validation(
                "Password is too weak. Please use a longer or less predictable password.",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(validator().validate("short").is_err());
    }

    #[test]
    fn test_weak_rejected() {
        assert!(validator().validate("password").is_err());
    }

    #[test]
    fn test_strong_accepted() {
        assert!(validator().validate("tidal-otter-reads-papers-42").is_ok());
    }
}
