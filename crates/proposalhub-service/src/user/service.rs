//! User administration — admin-only CRUD plus the supervisor roster.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use proposalhub_auth::guard::{AuthorizationGuard, Operation};
use proposalhub_auth::principal::Principal;
use proposalhub_core::error::AppError;
use proposalhub_core::result::AppResult;
use proposalhub_database::stores::UserStore;
use proposalhub_entity::user::{User, UserRole, UserUpdate};

/// Handles account administration.
#[derive(Clone)]
pub struct UserService {
    /// Identity store.
    users: Arc<dyn UserStore>,
    /// Authorization guard.
    guard: Arc<AuthorizationGuard>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>, guard: Arc<AuthorizationGuard>) -> Self {
        Self { users, guard }
    }

    /// Lists every account. Admin only.
    pub async fn list(&self, principal: &Principal) -> AppResult<Vec<User>> {
        self.guard.authorize(principal, Operation::ListUsers)?;
        self.users.list_all().await
    }

    /// Reads a single account by id. Admin only.
    pub async fn get(&self, principal: &Principal, id: Uuid) -> AppResult<User> {
        self.guard.authorize(principal, Operation::ReadUser)?;
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates an account's name, email, or role. Admin only.
    ///
    /// An admin may not change their own role; demoting the caller would
    /// cut off the very session performing the change.
    pub async fn update(
        &self,
        principal: &Principal,
        id: Uuid,
        update: UserUpdate,
    ) -> AppResult<User> {
        self.guard.authorize(principal, Operation::UpdateUser)?;

        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if update.role.is_some() && id == principal.id {
            return Err(AppError::forbidden("Cannot change your own role"));
        }

        let user = self.users.update(id, update).await?;

        info!(user_id = %id, admin_id = %principal.id, "User updated");

        Ok(user)
    }

    /// Deletes an account. Admin only; an admin cannot delete themselves.
    pub async fn delete(&self, principal: &Principal, id: Uuid) -> AppResult<()> {
        self.guard.authorize(principal, Operation::DeleteUser)?;

        if id == principal.id {
            return Err(AppError::forbidden("Cannot delete your own account"));
        }

        self.users.delete(id).await?;

        info!(user_id = %id, admin_id = %principal.id, "User deleted");

        Ok(())
    }

    /// Lists all supervisor accounts so students can pick one when
    /// drafting a proposal. Available to students and admins.
    pub async fn supervisor_roster(&self, principal: &Principal) -> AppResult<Vec<User>> {
        self.guard.authorize(principal, Operation::ListSupervisors)?;
        self.users.list_by_role(UserRole::Supervisor).await
    }
}

fn validate_email(email: &str) -> AppResult<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') || !email.contains('.') {
        return Err(AppError::validation("Please provide a valid email"));
    }
    Ok(())
}
