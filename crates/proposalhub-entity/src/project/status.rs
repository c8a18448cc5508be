//! Project review status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review lifecycle state of a project proposal.
///
/// Every project is created as `Submitted`. There is no terminal state:
/// any status may move to any other by supervisor or admin action, so a
/// reviewer can always reconsider a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Awaiting review.
    Submitted,
    /// Accepted by the assigned supervisor or an admin.
    Approved,
    /// Declined by the assigned supervisor or an admin.
    Rejected,
}

impl ProjectStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = proposalhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(proposalhub_core::AppError::validation(format!(
                "Invalid project status: '{s}'. Expected one of: submitted, approved, rejected"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "submitted".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Submitted
        );
        assert_eq!(
            "Approved".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Approved
        );
        assert!("pending".parse::<ProjectStatus>().is_err());
    }
}
