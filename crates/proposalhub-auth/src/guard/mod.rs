//! Role-based authorization: the permission matrix and the guard that
//! consults it.

pub mod guard;
pub mod matrix;
pub mod operation;

pub use guard::{AuthorizationGuard, owns};
pub use matrix::PermissionMatrix;
pub use operation::Operation;
