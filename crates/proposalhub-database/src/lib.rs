//! # proposalhub-database
//!
//! Persistence layer for ProposalHub.
//!
//! ## Modules
//!
//! - `stores` — the `UserStore` / `ProjectStore` trait seams the service
//!   layer depends on
//! - `repositories` — PostgreSQL implementations backed by sqlx, with
//!   uniqueness enforced by database constraints
//! - `memory` — single-node in-memory implementations used by tests and
//!   fixtures
//! - `connection` — connection pool setup
//! - `migration` — migration runner

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;

pub use connection::connect_pool;
pub use memory::{MemoryProjectStore, MemoryUserStore};
pub use repositories::{ProjectRepository, UserRepository};
pub use stores::{ProjectStore, UserStore};
