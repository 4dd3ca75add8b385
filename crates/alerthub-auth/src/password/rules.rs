//! Account password rules.

use alerthub_core::config::auth::AuthConfig;
use alerthub_core::error::AppError;

/// Validates new passwords against the account rules.
#[derive(Debug, Clone)]
pub struct PasswordRules {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordRules {
    /// Creates rules from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Check a candidate password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.min_length
            )));
        }
        Ok(())
    }

    /// Check a candidate password together with its confirmation field.
    pub fn validate_with_confirmation(
        &self,
        password: &str,
        confirmation: &str,
    ) -> Result<(), AppError> {
        self.validate(password)?;
        if password != confirmation {
            return Err(AppError::validation("Passwords do not match"));
        }
        Ok(())
    }
}
