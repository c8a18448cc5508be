//! # proposalhub-entity
//!
//! Domain entity models for ProposalHub: users with their roles, and
//! project proposals with their review lifecycle. Field validation rules
//! (length bounds, title normalization) live next to the types they guard
//! so every store backend enforces the same invariants.

pub mod project;
pub mod user;

pub use project::{NewProject, Project, ProjectDraft, ProjectStatus, ReviewUpdate};
pub use user::{NewUser, User, UserRole, UserUpdate};
