//! Password policy enforcement.

use proposalhub_core::config::auth::AuthConfig;
use proposalhub_core::error::AppError;

/// Validates candidate passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a candidate password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        let policy = PasswordPolicy { min_length: 6 };
        assert!(policy.validate("abcdef").is_ok());
        assert!(policy.validate("abcde").is_err());
    }
}
