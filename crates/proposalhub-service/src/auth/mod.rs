//! Registration, login, and current-user lookup.

pub mod service;

pub use service::{AuthResponse, AuthService, LoginRequest, RegisterRequest};
