//! In-memory store implementations for single-node use and test fixtures.

pub mod project;
pub mod user;

pub use project::MemoryProjectStore;
pub use user::MemoryUserStore;
