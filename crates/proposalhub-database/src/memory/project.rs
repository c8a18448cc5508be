//! In-memory project store using a Tokio mutex.
//!
//! The records map and the normalized-title index live behind one lock, so
//! the duplicate probe and the insert are a single atomic step. This is
//! the same conditional-insert guarantee the PostgreSQL backend gets from
//! its unique constraint.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use proposalhub_core::error::AppError;
use proposalhub_core::result::AppResult;
use proposalhub_entity::project::{
    NewProject, Project, ProjectStatus, ReviewUpdate, normalize_title,
};

use crate::stores::ProjectStore;

/// Internal state for the memory project store.
#[derive(Debug, Default)]
struct InnerState {
    /// Projects by id.
    projects: HashMap<Uuid, Project>,
    /// Normalized title → project id.
    titles: HashMap<String, Uuid>,
}

/// In-memory project store. Suitable for single-node use and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectStore {
    /// Protected inner state.
    state: Arc<Mutex<InnerState>>,
}

impl MemoryProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn create(&self, new: NewProject) -> AppResult<Project> {
        let mut state = self.state.lock().await;

        let normalized = normalize_title(&new.title);
        if state.titles.contains_key(&normalized) {
            return Err(AppError::duplicate_title(
                "Project with this title already exists. Please choose a different title.",
            ));
        }

        let project = Project {
            id: Uuid::new_v4(),
            title: new.title.trim().to_string(),
            description: new.description,
            status: ProjectStatus::Submitted,
            student: new.student,
            supervisor: new.supervisor,
            submission_date: Utc::now(),
            feedback: None,
        };

        state.titles.insert(normalized, project.id);
        state.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        let state = self.state.lock().await;
        Ok(state.projects.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Project>> {
        let state = self.state.lock().await;
        let id = state.titles.get(&normalize_title(title));
        Ok(id.and_then(|id| state.projects.get(id)).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Project>> {
        let state = self.state.lock().await;
        let mut projects: Vec<Project> = state.projects.values().cloned().collect();
        projects.sort_by(|a, b| b.submission_date.cmp(&a.submission_date));
        Ok(projects)
    }

    async fn list_by_student(&self, student: Uuid) -> AppResult<Vec<Project>> {
        let state = self.state.lock().await;
        let mut projects: Vec<Project> = state
            .projects
            .values()
            .filter(|p| p.student == student)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.submission_date.cmp(&a.submission_date));
        Ok(projects)
    }

    async fn list_by_supervisor(&self, supervisor: Uuid) -> AppResult<Vec<Project>> {
        let state = self.state.lock().await;
        let mut projects: Vec<Project> = state
            .projects
            .values()
            .filter(|p| p.supervisor == supervisor)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.submission_date.cmp(&a.submission_date));
        Ok(projects)
    }

    async fn update_review(&self, id: Uuid, update: ReviewUpdate) -> AppResult<Project> {
        let mut state = self.state.lock().await;

        let project = state
            .projects
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))?;

        if let Some(status) = update.status {
            project.status = status;
        }
        if let Some(feedback) = update.feedback {
            project.feedback = Some(feedback);
        }

        Ok(project.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut state = self.state.lock().await;

        let project = state
            .projects
            .remove(&id)
            .ok_or_else(|| AppError::not_found(format!("Project {id} not found")))?;

        state.titles.remove(&normalize_title(&project.title));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proposalhub_core::error::ErrorKind;

    fn new_project(title: &str) -> NewProject {
        NewProject {
            title: title.to_string(),
            description: "A description".to_string(),
            student: Uuid::new_v4(),
            supervisor: Uuid::new_v4(),
        }
    }

    #[tokio::test]
    async fn test_create_stamps_submitted_status() {
        let store = MemoryProjectStore::new();
        let project = store.create(new_project("Graph Compression")).await.unwrap();
        assert_eq!(project.status, ProjectStatus::Submitted);
        assert!(project.feedback.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_title_after_trim_and_case_fold() {
        let store = MemoryProjectStore::new();
        store.create(new_project("Graph Compression")).await.unwrap();

        let err = store
            .create(new_project(" graph compression "))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateTitle);
    }

    #[tokio::test]
    async fn test_concurrent_creates_one_winner() {
        let store = MemoryProjectStore::new();

        let mut handles = Vec::new();
        for title in ["Peer Review", " PEER REVIEW", "peer review "] {
            let store = store.clone();
            let new = new_project(title);
            handles.push(tokio::spawn(async move { store.create(new).await }));
        }

        let mut ok = 0;
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => ok += 1,
                Err(e) if e.kind == ErrorKind::DuplicateTitle => duplicates += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(duplicates, 2);
    }

    #[tokio::test]
    async fn test_delete_frees_title() {
        let store = MemoryProjectStore::new();
        let project = store.create(new_project("Reusable Title")).await.unwrap();
        store.delete(project.id).await.unwrap();
        assert!(store.create(new_project("reusable title")).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_review_applies_only_given_fields() {
        let store = MemoryProjectStore::new();
        let project = store.create(new_project("Partial Update")).await.unwrap();

        let updated = store
            .update_review(
                project.id,
                ReviewUpdate {
                    status: Some(ProjectStatus::Rejected),
                    feedback: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, ProjectStatus::Rejected);
        assert!(updated.feedback.is_none());

        let updated = store
            .update_review(
                project.id,
                ReviewUpdate {
                    status: None,
                    feedback: Some("Needs clearer scope".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, ProjectStatus::Rejected);
        assert_eq!(updated.feedback.as_deref(), Some("Needs clearer scope"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryProjectStore::new();
        let err = store
            .update_review(Uuid::new_v4(), ReviewUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
