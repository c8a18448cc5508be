//! The operations the core exposes to its callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every operation a caller can request against the core.
///
/// New operations must be added here and to the permission matrix; there
/// is no other authorization path, so an operation missing from the matrix
/// is denied for every role rather than silently allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Submit a new project proposal.
    CreateProject,
    /// Probe whether a title is still available.
    CheckTitle,
    /// List projects (result is scoped per role).
    ListProjects,
    /// Read a single project.
    ReadProject,
    /// Update a project's review status/feedback.
    UpdateProject,
    /// Delete a project.
    DeleteProject,
    /// List all users.
    ListUsers,
    /// Read a single user.
    ReadUser,
    /// Update a user.
    UpdateUser,
    /// Delete a user.
    DeleteUser,
    /// List supervisor-role users (the roster students pick from).
    ListSupervisors,
}

impl Operation {
    /// Return the operation as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateProject => "create_project",
            Self::CheckTitle => "check_title",
            Self::ListProjects => "list_projects",
            Self::ReadProject => "read_project",
            Self::UpdateProject => "update_project",
            Self::DeleteProject => "delete_project",
            Self::ListUsers => "list_users",
            Self::ReadUser => "read_user",
            Self::UpdateUser => "update_user",
            Self::DeleteUser => "delete_user",
            Self::ListSupervisors => "list_supervisors",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
