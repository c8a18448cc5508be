//! Self-service authentication — registration, login, profile lookup.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use proposalhub_auth::jwt::JwtEncoder;
use proposalhub_auth::password::{PasswordHasher, PasswordPolicy};
use proposalhub_auth::principal::Principal;
use proposalhub_core::error::AppError;
use proposalhub_core::result::AppResult;
use proposalhub_database::stores::UserStore;
use proposalhub_entity::user::{NewUser, User, UserRole};

/// Handles self-service authentication operations.
#[derive(Clone)]
pub struct AuthService {
    /// Identity store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Password policy.
    policy: PasswordPolicy,
    /// Token encoder.
    encoder: JwtEncoder,
}

/// Registration payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Human-readable name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Plaintext password; hashed before it reaches any store.
    pub password: String,
    /// Requested role. Only student and supervisor may self-register.
    pub role: UserRole,
}

/// Login payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// Registered email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Result of a successful registration or login.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AuthResponse {
    /// Signed access token.
    pub token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user (credential hash is never serialized).
    pub user: User,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        policy: PasswordPolicy,
        encoder: JwtEncoder,
    ) -> Self {
        Self {
            users,
            hasher,
            policy,
            encoder,
        }
    }

    /// Registers a new student or supervisor account and issues a token.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<AuthResponse> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Please provide a name"));
        }
        validate_email(&req.email)?;
        self.policy.validate(&req.password)?;

        if !req.role.is_self_registrable() {
            return Err(AppError::validation(
                "Role must be either student or supervisor",
            ));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .users
            .create(NewUser {
                name: req.name.trim().to_string(),
                email: req.email.trim().to_string(),
                password_hash,
                role: req.role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        self.issue_token(user)
    }

    /// Verifies an email/password pair and issues a token.
    ///
    /// Unknown email and wrong password both produce the same
    /// `InvalidCredential` so login probing cannot enumerate accounts.
    pub async fn login(&self, req: LoginRequest) -> AppResult<AuthResponse> {
        let user = self
            .users
            .find_by_email(req.email.trim())
            .await?
            .ok_or_else(|| AppError::invalid_credential("Invalid credentials"))?;

        let valid = self
            .hasher
            .verify_password(&req.password, &user.password_hash)?;
        if !valid {
            return Err(AppError::invalid_credential("Invalid credentials"));
        }

        info!(user_id = %user.id, "User logged in");

        self.issue_token(user)
    }

    /// Returns the full record of the authenticated user.
    pub async fn me(&self, principal: &Principal) -> AppResult<User> {
        self.users
            .find_by_id(principal.id)
            .await?
            .ok_or_else(|| AppError::principal_not_found("User no longer exists"))
    }

    fn issue_token(&self, user: User) -> AppResult<AuthResponse> {
        let (token, expires_at) = self.encoder.generate_access_token(user.id)?;
        Ok(AuthResponse {
            token,
            expires_at,
            user,
        })
    }
}

/// Minimal email shape check, matching what the original registration
/// form enforced.
fn validate_email(email: &str) -> AppResult<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') || !email.contains('.') {
        return Err(AppError::validation("Please provide a valid email"));
    }
    Ok(())
}
