//! Bearer token → [`Principal`] resolution against the identity store.

use std::sync::Arc;

use tracing::warn;

use proposalhub_core::error::AppError;
use proposalhub_core::result::AppResult;
use proposalhub_database::stores::UserStore;

use crate::jwt::JwtDecoder;
use crate::principal::Principal;

/// Resolves presented bearer tokens to authenticated principals.
///
/// Verification is read-only: decode the token, then load the subject from
/// the identity store. The returned role is the *current* stored role, not
/// whatever the token carried at issuance, so a demoted supervisor loses
/// access the moment the store changes.
#[derive(Clone)]
pub struct CredentialVerifier {
    /// Token decoder.
    decoder: JwtDecoder,
    /// Identity store for subject lookup.
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl CredentialVerifier {
    /// Creates a new verifier.
    pub fn new(decoder: JwtDecoder, users: Arc<dyn UserStore>) -> Self {
        Self { decoder, users }
    }

    /// Authenticates a bearer token.
    ///
    /// - Malformed, expired, or badly signed token → `InvalidCredential`
    /// - Well-formed token whose subject no longer exists → `PrincipalNotFound`
    pub async fn authenticate(&self, token: &str) -> AppResult<Principal> {
        let claims = self.decoder.decode_access_token(token)?;

        let user = self
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| {
                warn!(subject = %claims.sub, "Valid token for a deleted user");
                AppError::principal_not_found("Token subject no longer exists")
            })?;

        Ok(Principal {
            id: user.id,
            role: user.role,
            name: user.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use proposalhub_core::config::auth::AuthConfig;
    use proposalhub_core::error::ErrorKind;
    use proposalhub_database::memory::MemoryUserStore;
    use proposalhub_entity::user::{NewUser, UserRole, UserUpdate};
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_access_ttl_minutes: 60,
            password_min_length: 6,
        }
    }

    async fn seeded_store() -> (Arc<MemoryUserStore>, Uuid) {
        let store = Arc::new(MemoryUserStore::new());
        let user = store
            .create(NewUser {
                name: "Ada".to_string(),
                email: "ada@uni.edu".to_string(),
                password_hash: "$argon2id$fake".to_string(),
                role: UserRole::Student,
            })
            .await
            .unwrap();
        (store, user.id)
    }

    #[tokio::test]
    async fn test_authenticate_returns_current_role() {
        let (store, user_id) = seeded_store().await;
        let (token, _) = JwtEncoder::new(&config())
            .generate_access_token(user_id)
            .unwrap();
        let verifier = CredentialVerifier::new(JwtDecoder::new(&config()), store.clone());

        let principal = verifier.authenticate(&token).await.unwrap();
        assert_eq!(principal.role, UserRole::Student);

        // Role change takes effect without re-issuing the token.
        store
            .update(
                user_id,
                UserUpdate {
                    role: Some(UserRole::Supervisor),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let principal = verifier.authenticate(&token).await.unwrap();
        assert_eq!(principal.role, UserRole::Supervisor);
    }

    #[tokio::test]
    async fn test_deleted_subject_is_principal_not_found() {
        let (store, user_id) = seeded_store().await;
        let (token, _) = JwtEncoder::new(&config())
            .generate_access_token(user_id)
            .unwrap();
        store.delete(user_id).await.unwrap();

        let verifier = CredentialVerifier::new(JwtDecoder::new(&config()), store);
        let err = verifier.authenticate(&token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::PrincipalNotFound);
    }

    #[tokio::test]
    async fn test_garbled_token_is_invalid_credential() {
        let (store, _) = seeded_store().await;
        let verifier = CredentialVerifier::new(JwtDecoder::new(&config()), store);

        let err = verifier.authenticate("garbage").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredential);
    }
}
