//! In-memory identity store using a Tokio mutex.
//!
//! Email uniqueness follows the same conditional-insert shape as the
//! project title index: probe and insert happen under one lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use proposalhub_core::error::AppError;
use proposalhub_core::result::AppResult;
use proposalhub_entity::user::{NewUser, User, UserRole, UserUpdate};

use crate::stores::UserStore;

/// Internal state for the memory user store.
#[derive(Debug, Default)]
struct InnerState {
    /// Users by id.
    users: HashMap<Uuid, User>,
    /// Lowercased email → user id.
    emails: HashMap<String, Uuid>,
}

/// In-memory identity store. Suitable for single-node use and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    /// Protected inner state.
    state: Arc<Mutex<InnerState>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, new: NewUser) -> AppResult<User> {
        let mut state = self.state.lock().await;

        let email_key = new.email.to_lowercase();
        if state.emails.contains_key(&email_key) {
            return Err(AppError::conflict("Email is already registered"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
            created_at: now,
            updated_at: now,
        };

        state.emails.insert(email_key, user.id);
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        let id = state.emails.get(&email.to_lowercase());
        Ok(id.and_then(|id| state.users.get(id)).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        let state = self.state.lock().await;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        let state = self.state.lock().await;
        let mut users: Vec<User> = state
            .users
            .values()
            .filter(|u| u.role == role)
            .cloned()
            .collect();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(users)
    }

    async fn update(&self, id: Uuid, update: UserUpdate) -> AppResult<User> {
        let mut state = self.state.lock().await;

        let current_email = state
            .users
            .get(&id)
            .map(|u| u.email.clone())
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        if let Some(ref email) = update.email {
            let email_key = email.to_lowercase();
            if let Some(&owner) = state.emails.get(&email_key) {
                if owner != id {
                    return Err(AppError::conflict("Email is already registered"));
                }
            }
            state.emails.remove(&current_email.to_lowercase());
            state.emails.insert(email_key, id);
        }

        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.state.lock().await;

        let user = state
            .users
            .remove(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        state.emails.remove(&user.email.to_lowercase());
        Ok(())
    }
}
