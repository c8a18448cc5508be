//! The authenticated identity derived from a request's credential.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use proposalhub_entity::user::UserRole;

/// An authenticated caller.
///
/// Produced by [`CredentialVerifier::authenticate`] and passed into every
/// service operation. The role reflects the identity store at verification
/// time, not the role at token issuance, so role changes take effect
/// without re-issuing tokens.
///
/// [`CredentialVerifier::authenticate`]: crate::verifier::CredentialVerifier::authenticate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The authenticated user's id.
    pub id: Uuid,
    /// The user's current role.
    pub role: UserRole,
    /// The user's name (convenience for log fields).
    pub name: String,
}

impl Principal {
    /// Returns whether the principal is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
