//! Project repository implementation.
//!
//! Title uniqueness is enforced by the `projects_title_normalized_key`
//! constraint, so the duplicate probe and the insert cannot race: the
//! database evaluates them as one conditional insert.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use proposalhub_core::error::AppError;
use proposalhub_core::result::AppResult;
use proposalhub_entity::project::{NewProject, Project, ReviewUpdate, normalize_title};

use super::map_db_err;
use crate::stores::ProjectStore;

/// PostgreSQL-backed project store.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn create(&self, new: NewProject) -> AppResult<Project> {
        let title = new.title.trim();

        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (title, title_normalized, description, student, supervisor) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(title)
        .bind(normalize_title(title))
        .bind(&new.description)
        .bind(new.student)
        .bind(new.supervisor)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("projects_title_normalized_key") =>
            {
                AppError::duplicate_title(
                    "Project with this title already exists. Please choose a different title.",
                )
            }
            _ => map_db_err("Failed to create project", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to find project by id", e))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE title_normalized = $1")
            .bind(normalize_title(title))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to find project by title", e))
    }

    async fn list_all(&self) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY submission_date DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to list projects", e))
    }

    async fn list_by_student(&self, student: Uuid) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE student = $1 ORDER BY submission_date DESC",
        )
        .bind(student)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_err("Failed to list projects by student", e))
    }

    async fn list_by_supervisor(&self, supervisor: Uuid) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE supervisor = $1 ORDER BY submission_date DESC",
        )
        .bind(supervisor)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_err("Failed to list projects by supervisor", e))
    }

    async fn update_review(&self, id: Uuid, update: ReviewUpdate) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET status = COALESCE($2, status), \
                                 feedback = COALESCE($3, feedback) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(update.status)
        .bind(&update.feedback)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_err("Failed to update project review", e))?
        .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_err("Failed to delete project", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Project {id} not found")));
        }
        Ok(())
    }
}
