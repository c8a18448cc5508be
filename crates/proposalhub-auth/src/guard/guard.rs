//! Authorization enforcement — the single entry point every operation
//! passes through before touching a store.

use proposalhub_core::error::AppError;
use proposalhub_core::result::AppResult;
use proposalhub_entity::project::Project;
use proposalhub_entity::user::UserRole;

use crate::principal::Principal;

use super::matrix::PermissionMatrix;
use super::operation::Operation;

/// Enforces the role-permission matrix plus record-ownership rules.
#[derive(Debug, Clone)]
pub struct AuthorizationGuard {
    /// The permission matrix.
    matrix: PermissionMatrix,
}

impl AuthorizationGuard {
    /// Creates a guard with the default permission matrix.
    pub fn new() -> Self {
        Self {
            matrix: PermissionMatrix::new(),
        }
    }

    /// Creates a guard with a custom matrix.
    pub fn with_matrix(matrix: PermissionMatrix) -> Self {
        Self { matrix }
    }

    /// Checks the permission matrix for a role-level operation.
    ///
    /// Returns `Ok(())` if the principal's role may attempt the operation,
    /// or `Err(Forbidden)` otherwise. Record ownership is not consulted
    /// here; use [`authorize_project`](Self::authorize_project) for
    /// record-scoped operations.
    pub fn authorize(&self, principal: &Principal, operation: Operation) -> AppResult<()> {
        if self.matrix.permits(principal.role, operation) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Role '{}' is not allowed to {operation}",
                principal.role
            )))
        }
    }

    /// Authorizes a record-scoped project operation.
    ///
    /// `target` is the store lookup result for the requested id. The
    /// not-found/forbidden distinction deliberately leaks as little as
    /// possible: only admins learn that an id does not exist; every other
    /// principal sees `Forbidden` whether the project is missing or simply
    /// not theirs, so probing ids reveals nothing.
    pub fn authorize_project(
        &self,
        principal: &Principal,
        operation: Operation,
        target: Option<&Project>,
    ) -> AppResult<()> {
        self.authorize(principal, operation)?;

        match target {
            Some(project) if owns(principal, project) => Ok(()),
            Some(_) => Err(AppError::forbidden(format!(
                "Not authorized to {operation} this project"
            ))),
            None if principal.is_admin() => Err(AppError::not_found("Project not found")),
            None => Err(AppError::forbidden(format!(
                "Not authorized to {operation} this project"
            ))),
        }
    }
}

impl Default for AuthorizationGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Ownership capability predicate.
///
/// Admins own everything; a student owns the projects they authored; a
/// supervisor owns the projects assigned to them. Kept independent of the
/// storage layer so it can be tested against plain fixtures.
pub fn owns(principal: &Principal, project: &Project) -> bool {
    match principal.role {
        UserRole::Admin => true,
        UserRole::Student => project.student == principal.id,
        UserRole::Supervisor => project.supervisor == principal.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proposalhub_core::error::ErrorKind;
    use proposalhub_entity::project::ProjectStatus;
    use uuid::Uuid;

    fn principal(role: UserRole) -> Principal {
        Principal {
            id: Uuid::new_v4(),
            role,
            name: "Test".to_string(),
        }
    }

    fn project(student: Uuid, supervisor: Uuid) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: "Graph Compression".to_string(),
            description: "Succinct graph encodings".to_string(),
            status: ProjectStatus::Submitted,
            student,
            supervisor,
            submission_date: Utc::now(),
            feedback: None,
        }
    }

    #[test]
    fn test_read_allowed_iff_admin_owner_or_assigned() {
        let guard = AuthorizationGuard::new();

        let student = principal(UserRole::Student);
        let supervisor = principal(UserRole::Supervisor);
        let admin = principal(UserRole::Admin);
        let target = project(student.id, supervisor.id);

        for p in [&student, &supervisor, &admin] {
            assert!(
                guard
                    .authorize_project(p, Operation::ReadProject, Some(&target))
                    .is_ok()
            );
        }

        let other_student = principal(UserRole::Student);
        let other_supervisor = principal(UserRole::Supervisor);
        for p in [&other_student, &other_supervisor] {
            let err = guard
                .authorize_project(p, Operation::ReadProject, Some(&target))
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Forbidden);
        }
    }

    #[test]
    fn test_missing_target_leaks_existence_to_admins_only() {
        let guard = AuthorizationGuard::new();

        let err = guard
            .authorize_project(
                &principal(UserRole::Admin),
                Operation::ReadProject,
                None,
            )
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        for role in [UserRole::Student, UserRole::Supervisor] {
            let err = guard
                .authorize_project(&principal(role), Operation::ReadProject, None)
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Forbidden);
        }
    }

    #[test]
    fn test_owning_student_still_cannot_update_review() {
        let guard = AuthorizationGuard::new();

        let student = principal(UserRole::Student);
        let target = project(student.id, Uuid::new_v4());

        let err = guard
            .authorize_project(&student, Operation::UpdateProject, Some(&target))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_assigned_supervisor_may_update() {
        let guard = AuthorizationGuard::new();

        let supervisor = principal(UserRole::Supervisor);
        let target = project(Uuid::new_v4(), supervisor.id);

        assert!(
            guard
                .authorize_project(&supervisor, Operation::UpdateProject, Some(&target))
                .is_ok()
        );
    }
}
