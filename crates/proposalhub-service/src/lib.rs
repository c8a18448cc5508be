//! # proposalhub-service
//!
//! The operation layer of ProposalHub. Every inbound request is resolved
//! to a [`Principal`] by the credential verifier, checked by the
//! authorization guard, and only then allowed to touch a store. The
//! transport layer above this crate owns HTTP concerns; nothing here
//! holds cross-request session state.
//!
//! [`Principal`]: proposalhub_auth::Principal

pub mod auth;
pub mod project;
pub mod user;

pub use auth::AuthService;
pub use project::ProjectService;
pub use user::UserService;
