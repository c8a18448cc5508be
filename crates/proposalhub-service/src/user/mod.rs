//! User administration and the supervisor roster.

pub mod service;

pub use service::UserService;
