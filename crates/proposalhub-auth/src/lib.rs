//! # proposalhub-auth
//!
//! Authentication and authorization for ProposalHub.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `principal` — the authenticated identity derived from a credential
//! - `verifier` — bearer token → [`Principal`] resolution against the
//!   identity store
//! - `guard` — the declarative role-permission matrix and ownership checks

pub mod guard;
pub mod jwt;
pub mod password;
pub mod principal;
pub mod verifier;

pub use guard::{AuthorizationGuard, Operation, PermissionMatrix};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordPolicy};
pub use principal::Principal;
pub use verifier::CredentialVerifier;
