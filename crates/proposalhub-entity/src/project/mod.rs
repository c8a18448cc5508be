//! Project proposal entity, review status, and validation rules.

pub mod model;
pub mod status;

pub use model::{
    DESCRIPTION_MAX_CHARS, FEEDBACK_MAX_CHARS, NewProject, Project, ProjectDraft, ReviewUpdate,
    TITLE_MAX_CHARS, normalize_title,
};
pub use status::ProjectStatus;
