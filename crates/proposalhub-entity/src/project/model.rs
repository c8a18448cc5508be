//! Project proposal model and field validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use proposalhub_core::AppError;

use super::status::ProjectStatus;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 100;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
/// Maximum feedback length in characters.
pub const FEEDBACK_MAX_CHARS: usize = 500;

/// A student project proposal.
///
/// `title`, `description`, `student`, `supervisor`, and `submission_date`
/// are write-once; only `status` and `feedback` change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Proposal title (trimmed, unique under case-insensitive comparison).
    pub title: String,
    /// Proposal description.
    pub description: String,
    /// Review status.
    pub status: ProjectStatus,
    /// Owning student (immutable after creation).
    pub student: Uuid,
    /// Assigned reviewing supervisor (immutable after creation).
    pub supervisor: Uuid,
    /// When the proposal was submitted (immutable).
    pub submission_date: DateTime<Utc>,
    /// Reviewer feedback, if any.
    pub feedback: Option<String>,
}

/// Incoming proposal fields from a student, prior to validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDraft {
    /// Proposal title.
    pub title: String,
    /// Proposal description.
    pub description: String,
    /// Chosen supervisor's user id.
    pub supervisor: Uuid,
}

impl ProjectDraft {
    /// Validate required fields and length bounds.
    ///
    /// The title is compared by character count after trimming, matching
    /// the comparison used for the uniqueness probe.
    pub fn validate(&self) -> Result<(), AppError> {
        let title = self.title.trim();
        if title.is_empty() || self.description.is_empty() {
            return Err(AppError::validation(
                "Please provide title, description and supervisor",
            ));
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(AppError::validation(format!(
                "Title cannot be more than {TITLE_MAX_CHARS} characters"
            )));
        }
        if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(AppError::validation(format!(
                "Description cannot be more than {DESCRIPTION_MAX_CHARS} characters"
            )));
        }
        Ok(())
    }
}

/// A validated project ready for insertion, with ownership stamped.
#[derive(Debug, Clone)]
pub struct NewProject {
    /// Trimmed proposal title.
    pub title: String,
    /// Proposal description.
    pub description: String,
    /// Authoring student's user id.
    pub student: Uuid,
    /// Assigned supervisor's user id.
    pub supervisor: Uuid,
}

/// Review fields a supervisor or admin may change. Absent fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewUpdate {
    /// New review status.
    pub status: Option<ProjectStatus>,
    /// New feedback text.
    pub feedback: Option<String>,
}

impl ReviewUpdate {
    /// Validate the feedback length bound.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(ref feedback) = self.feedback {
            if feedback.chars().count() > FEEDBACK_MAX_CHARS {
                return Err(AppError::validation(format!(
                    "Feedback cannot be more than {FEEDBACK_MAX_CHARS} characters"
                )));
            }
        }
        Ok(())
    }

    /// Whether the update carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.feedback.is_none()
    }
}

/// Normalize a title for uniqueness comparison: trim then case-fold.
///
/// The same function backs both the pre-flight availability probe and the
/// create-time enforcement, so the two paths can never disagree.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            description: description.to_string(),
            supervisor: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_title_boundary() {
        assert!(draft(&"a".repeat(100), "desc").validate().is_ok());
        assert!(draft(&"a".repeat(101), "desc").validate().is_err());
    }

    #[test]
    fn test_description_boundary() {
        assert!(draft("title", &"d".repeat(1000)).validate().is_ok());
        assert!(draft("title", &"d".repeat(1001)).validate().is_err());
    }

    #[test]
    fn test_missing_fields() {
        assert!(draft("", "desc").validate().is_err());
        assert!(draft("   ", "desc").validate().is_err());
        assert!(draft("title", "").validate().is_err());
    }

    #[test]
    fn test_feedback_boundary() {
        let ok = ReviewUpdate {
            status: None,
            feedback: Some("f".repeat(500)),
        };
        assert!(ok.validate().is_ok());

        let too_long = ReviewUpdate {
            status: None,
            feedback: Some("f".repeat(501)),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title(" Graph Compression "), "graph compression");
        assert_eq!(
            normalize_title("graph compression"),
            normalize_title("  GRAPH COMPRESSION")
        );
    }
}
