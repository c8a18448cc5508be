//! Project proposal lifecycle operations.

pub mod service;

pub use service::ProjectService;
