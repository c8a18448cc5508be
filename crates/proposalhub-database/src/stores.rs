//! Store trait seams between the service layer and storage backends.
//!
//! Services depend on these traits rather than on a concrete backend, so
//! authorization and lifecycle logic can be exercised against in-memory
//! fixtures without a running database.

use async_trait::async_trait;
use uuid::Uuid;

use proposalhub_core::AppResult;
use proposalhub_entity::project::{NewProject, Project, ReviewUpdate};
use proposalhub_entity::user::{NewUser, User, UserRole, UserUpdate};

/// Identity store operations.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Create a new user. Fails with `Conflict` if the email is already
    /// registered (case-insensitive).
    async fn create(&self, new: NewUser) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users.
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// List users with the given role.
    async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>>;

    /// Apply the given fields to a user. Absent fields are left unchanged.
    /// Fails with `NotFound` if the id is unknown.
    async fn update(&self, id: Uuid, update: UserUpdate) -> AppResult<User>;

    /// Delete a user. Fails with `NotFound` if the id is unknown.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Project store operations.
///
/// Implementations must evaluate the title-uniqueness probe and the insert
/// as one atomic step (conditional insert keyed by the normalized title):
/// under concurrent creates of the same title at most one may succeed and
/// the loser observes `DuplicateTitle`.
#[async_trait]
pub trait ProjectStore: Send + Sync + 'static {
    /// Insert a validated project. Stamps `status = submitted` and the
    /// submission date. Fails with `DuplicateTitle` if another project has
    /// the same trimmed, case-folded title.
    async fn create(&self, new: NewProject) -> AppResult<Project>;

    /// Find a project by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>>;

    /// Find a project whose normalized title matches the given title.
    /// Uses the same normalization as [`create`](Self::create).
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Project>>;

    /// List every project.
    async fn list_all(&self) -> AppResult<Vec<Project>>;

    /// List projects authored by the given student.
    async fn list_by_student(&self, student: Uuid) -> AppResult<Vec<Project>>;

    /// List projects assigned to the given supervisor.
    async fn list_by_supervisor(&self, supervisor: Uuid) -> AppResult<Vec<Project>>;

    /// Apply status/feedback changes. Absent fields are left unchanged.
    /// Fails with `NotFound` if the id is unknown.
    async fn update_review(&self, id: Uuid, update: ReviewUpdate) -> AppResult<Project>;

    /// Delete a project. Fails with `NotFound` if the id is unknown.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}
