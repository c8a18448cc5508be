//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the system.
///
/// Students author proposals, supervisors review the proposals assigned to
/// them, and admins manage everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full system administrator.
    Admin,
    /// Reviews project proposals assigned to them.
    Supervisor,
    /// Submits project proposals.
    Student,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether the role may be chosen at self-service registration.
    ///
    /// Admin accounts are only created through admin user management.
    pub fn is_self_registrable(&self) -> bool {
        matches!(self, Self::Student | Self::Supervisor)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Supervisor => "supervisor",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = proposalhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "supervisor" => Ok(Self::Supervisor),
            "student" => Ok(Self::Student),
            _ => Err(proposalhub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, supervisor, student"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("STUDENT".parse::<UserRole>().unwrap(), UserRole::Student);
        assert!("reviewer".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_self_registrable() {
        assert!(UserRole::Student.is_self_registrable());
        assert!(UserRole::Supervisor.is_self_registrable());
        assert!(!UserRole::Admin.is_self_registrable());
    }
}
