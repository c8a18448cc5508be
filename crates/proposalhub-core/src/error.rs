//! Unified application error types for ProposalHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. The kinds mirror the access-control
//! contract: authentication failures are distinguished from authorization
//! failures, and the duplicate-title conflict has its own kind because the
//! title-uniqueness invariant is central to the domain.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The presented credential is malformed, expired, or has a bad signature.
    InvalidCredential,
    /// The credential was valid but its subject no longer exists.
    PrincipalNotFound,
    /// The caller is authenticated but not allowed to perform the action.
    Forbidden,
    /// The requested resource was not found.
    NotFound,
    /// Input validation failed (missing field, over-length, bad enum value).
    Validation,
    /// A project with the same normalized title already exists.
    DuplicateTitle,
    /// A uniqueness conflict other than the project title (e.g. email).
    Conflict,
    /// The backing store is temporarily unreachable; the caller may retry.
    Unavailable,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredential => write!(f, "INVALID_CREDENTIAL"),
            Self::PrincipalNotFound => write!(f, "PRINCIPAL_NOT_FOUND"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::DuplicateTitle => write!(f, "DUPLICATE_TITLE"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Unavailable => write!(f, "UNAVAILABLE"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout ProposalHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary; the transport layer above this core is
/// responsible for mapping kinds to status codes.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-credential error.
    pub fn invalid_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCredential, message)
    }

    /// Create a principal-not-found error.
    pub fn principal_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PrincipalNotFound, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a duplicate-title error.
    pub fn duplicate_title(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateTitle, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unavailable, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether a caller may retry the failed operation unmodified.
    ///
    /// Only transient store failures are retryable; every other kind is
    /// terminal for that request.
    pub fn is_retryable(&self) -> bool {
        self.kind == ErrorKind::Unavailable
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unavailable_is_retryable() {
        assert!(AppError::unavailable("pool timed out").is_retryable());
        assert!(!AppError::forbidden("no").is_retryable());
        assert!(!AppError::duplicate_title("taken").is_retryable());
        assert!(!AppError::not_found("gone").is_retryable());
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = AppError::duplicate_title("title already exists");
        assert_eq!(err.to_string(), "DUPLICATE_TITLE: title already exists");
    }
}
