//! Role-to-operation permission mapping.
//!
//! The original system scattered these decisions across per-route checks;
//! here they live in one declarative table so every operation is forced
//! through the same lookup.

use std::collections::{HashMap, HashSet};

use proposalhub_entity::user::UserRole;

use super::operation::Operation;

/// Defines the mapping from each role to its set of allowed operations.
///
/// Ownership scoping (own projects only, assigned projects only) is layered
/// on top by the guard; the matrix answers the coarser question of whether
/// the role may attempt the operation at all.
#[derive(Debug, Clone)]
pub struct PermissionMatrix {
    /// Role → set of operations.
    allowed: HashMap<UserRole, HashSet<Operation>>,
}

impl PermissionMatrix {
    /// Creates the default permission set.
    pub fn new() -> Self {
        let mut allowed = HashMap::new();

        // Students: author proposals, browse their own, pick a supervisor
        let student: HashSet<Operation> = [
            Operation::CreateProject,
            Operation::CheckTitle,
            Operation::ListProjects,
            Operation::ReadProject,
            Operation::ListSupervisors,
        ]
        .into_iter()
        .collect();
        allowed.insert(UserRole::Student, student);

        // Supervisors: review what is assigned to them
        let supervisor: HashSet<Operation> = [
            Operation::ListProjects,
            Operation::ReadProject,
            Operation::UpdateProject,
        ]
        .into_iter()
        .collect();
        allowed.insert(UserRole::Supervisor, supervisor);

        // Admins: everything except authoring proposals, which belongs to
        // students alone
        let admin: HashSet<Operation> = [
            Operation::ListProjects,
            Operation::ReadProject,
            Operation::UpdateProject,
            Operation::DeleteProject,
            Operation::ListUsers,
            Operation::ReadUser,
            Operation::UpdateUser,
            Operation::DeleteUser,
            Operation::ListSupervisors,
        ]
        .into_iter()
        .collect();
        allowed.insert(UserRole::Admin, admin);

        Self { allowed }
    }

    /// Checks whether the given role may attempt the operation.
    pub fn permits(&self, role: UserRole, operation: Operation) -> bool {
        self.allowed
            .get(&role)
            .map(|ops| ops.contains(&operation))
            .unwrap_or(false)
    }
}

impl Default for PermissionMatrix {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_students_create_projects() {
        let matrix = PermissionMatrix::new();
        assert!(matrix.permits(UserRole::Student, Operation::CreateProject));
        assert!(!matrix.permits(UserRole::Supervisor, Operation::CreateProject));
        assert!(!matrix.permits(UserRole::Admin, Operation::CreateProject));
    }

    #[test]
    fn test_only_admins_delete_projects() {
        let matrix = PermissionMatrix::new();
        assert!(matrix.permits(UserRole::Admin, Operation::DeleteProject));
        assert!(!matrix.permits(UserRole::Student, Operation::DeleteProject));
        assert!(!matrix.permits(UserRole::Supervisor, Operation::DeleteProject));
    }

    #[test]
    fn test_students_cannot_update_reviews() {
        let matrix = PermissionMatrix::new();
        assert!(!matrix.permits(UserRole::Student, Operation::UpdateProject));
        assert!(matrix.permits(UserRole::Supervisor, Operation::UpdateProject));
        assert!(matrix.permits(UserRole::Admin, Operation::UpdateProject));
    }

    #[test]
    fn test_user_management_is_admin_only() {
        let matrix = PermissionMatrix::new();
        for op in [
            Operation::ListUsers,
            Operation::ReadUser,
            Operation::UpdateUser,
            Operation::DeleteUser,
        ] {
            assert!(matrix.permits(UserRole::Admin, op));
            assert!(!matrix.permits(UserRole::Student, op));
            assert!(!matrix.permits(UserRole::Supervisor, op));
        }
    }

    #[test]
    fn test_roster_is_student_or_admin() {
        let matrix = PermissionMatrix::new();
        assert!(matrix.permits(UserRole::Student, Operation::ListSupervisors));
        assert!(matrix.permits(UserRole::Admin, Operation::ListSupervisors));
        assert!(!matrix.permits(UserRole::Supervisor, Operation::ListSupervisors));
    }
}
