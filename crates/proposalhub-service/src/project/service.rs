//! Project operations — create, probe, list, read, review, delete.
//!
//! Each operation takes an already-authenticated [`Principal`] and passes
//! through the authorization guard before touching a store.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use proposalhub_auth::guard::{AuthorizationGuard, Operation};
use proposalhub_auth::principal::Principal;
use proposalhub_core::error::AppError;
use proposalhub_core::result::AppResult;
use proposalhub_database::stores::{ProjectStore, UserStore};
use proposalhub_entity::project::{NewProject, Project, ProjectDraft, ReviewUpdate};
use proposalhub_entity::user::UserRole;

/// Handles the project proposal lifecycle.
#[derive(Clone)]
pub struct ProjectService {
    /// Project store.
    projects: Arc<dyn ProjectStore>,
    /// Identity store, consulted to validate supervisor references.
    users: Arc<dyn UserStore>,
    /// Authorization guard.
    guard: Arc<AuthorizationGuard>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(
        projects: Arc<dyn ProjectStore>,
        users: Arc<dyn UserStore>,
        guard: Arc<AuthorizationGuard>,
    ) -> Self {
        Self {
            projects,
            users,
            guard,
        }
    }

    /// Submits a new project proposal authored by the calling student.
    ///
    /// The draft's supervisor reference must resolve to a supervisor-role
    /// user at creation time; it is not re-validated afterwards.
    pub async fn create(&self, principal: &Principal, draft: ProjectDraft) -> AppResult<Project> {
        self.guard.authorize(principal, Operation::CreateProject)?;
        draft.validate()?;

        let supervisor = self
            .users
            .find_by_id(draft.supervisor)
            .await?
            .ok_or_else(|| AppError::validation("Supervisor does not exist"))?;
        if supervisor.role != UserRole::Supervisor {
            return Err(AppError::validation(
                "Assigned supervisor must have the supervisor role",
            ));
        }

        let project = self
            .projects
            .create(NewProject {
                title: draft.title,
                description: draft.description,
                student: principal.id,
                supervisor: supervisor.id,
            })
            .await?;

        info!(
            project_id = %project.id,
            student_id = %principal.id,
            supervisor_id = %supervisor.id,
            "Project submitted"
        );

        Ok(project)
    }

    /// Pre-flight duplicate probe: whether a title is already taken.
    ///
    /// Uses the same trim + case-fold normalization as the create path, so
    /// the probe's answer cannot disagree with enforcement.
    pub async fn check_title(&self, principal: &Principal, title: &str) -> AppResult<bool> {
        self.guard.authorize(principal, Operation::CheckTitle)?;

        if title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }

        Ok(self.projects.find_by_title(title).await?.is_some())
    }

    /// Lists projects visible to the caller: own for students, assigned
    /// for supervisors, all for admins.
    pub async fn list(&self, principal: &Principal) -> AppResult<Vec<Project>> {
        self.guard.authorize(principal, Operation::ListProjects)?;

        match principal.role {
            UserRole::Student => self.projects.list_by_student(principal.id).await,
            UserRole::Supervisor => self.projects.list_by_supervisor(principal.id).await,
            UserRole::Admin => self.projects.list_all().await,
        }
    }

    /// Reads a single project, subject to the ownership rules.
    pub async fn get(&self, principal: &Principal, id: Uuid) -> AppResult<Project> {
        let project = self.projects.find_by_id(id).await?;
        self.guard
            .authorize_project(principal, Operation::ReadProject, project.as_ref())?;

        project.ok_or_else(|| AppError::internal("Authorized read lost its target"))
    }

    /// Applies a review decision. Only the assigned supervisor or an admin
    /// may change status/feedback; no transition ordering is enforced, so
    /// a reviewer can always reconsider.
    pub async fn update_review(
        &self,
        principal: &Principal,
        id: Uuid,
        update: ReviewUpdate,
    ) -> AppResult<Project> {
        update.validate()?;

        let project = self.projects.find_by_id(id).await?;
        self.guard
            .authorize_project(principal, Operation::UpdateProject, project.as_ref())?;

        if update.is_empty() {
            return project.ok_or_else(|| AppError::internal("Authorized update lost its target"));
        }

        let updated = self.projects.update_review(id, update).await?;

        info!(
            project_id = %id,
            reviewer_id = %principal.id,
            status = %updated.status,
            "Project review updated"
        );

        Ok(updated)
    }

    /// Deletes a project. Admin only; no cascading side effects.
    pub async fn delete(&self, principal: &Principal, id: Uuid) -> AppResult<()> {
        let project = self.projects.find_by_id(id).await?;
        self.guard
            .authorize_project(principal, Operation::DeleteProject, project.as_ref())?;

        self.projects.delete(id).await?;

        info!(project_id = %id, admin_id = %principal.id, "Project deleted");

        Ok(())
    }
}
