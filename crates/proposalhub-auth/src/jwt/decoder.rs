//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use proposalhub_core::config::auth::AuthConfig;
use proposalhub_core::error::AppError;

use super::claims::Claims;

/// Validates JWT access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Every failure mode — malformed token, bad signature, expiry — maps
    /// to `InvalidCredential`; the caller learns nothing beyond "this
    /// credential does not work".
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::invalid_credential("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::invalid_credential("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::invalid_credential("Invalid token signature")
                    }
                    _ => AppError::invalid_credential(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use proposalhub_core::error::ErrorKind;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_access_ttl_minutes: 60,
            password_min_length: 6,
        }
    }

    #[test]
    fn test_round_trip() {
        let user_id = Uuid::new_v4();
        let (token, _) = JwtEncoder::new(&config())
            .generate_access_token(user_id)
            .unwrap();

        let claims = JwtDecoder::new(&config())
            .decode_access_token(&token)
            .unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_garbled_token_is_invalid_credential() {
        let err = JwtDecoder::new(&config())
            .decode_access_token("not-a-jwt")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredential);
    }

    #[test]
    fn test_wrong_secret_is_invalid_credential() {
        let (token, _) = JwtEncoder::new(&config())
            .generate_access_token(Uuid::new_v4())
            .unwrap();

        let other = AuthConfig {
            jwt_secret: "different-secret".to_string(),
            ..config()
        };
        let err = JwtDecoder::new(&other)
            .decode_access_token(&token)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredential);
    }
}
