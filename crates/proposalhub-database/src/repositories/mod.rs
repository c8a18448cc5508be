//! PostgreSQL repository implementations.

pub mod project;
pub mod user;

pub use project::ProjectRepository;
pub use user::UserRepository;

use proposalhub_core::error::{AppError, ErrorKind};

/// Map a sqlx error into the application taxonomy.
///
/// Pool exhaustion and I/O timeouts are the transient, retryable case;
/// everything else is a hard database failure.
pub(crate) fn map_db_err(context: &str, err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::PoolTimedOut => AppError::with_source(
            ErrorKind::Unavailable,
            format!("{context}: connection pool timed out"),
            err,
        ),
        sqlx::Error::Io(_) => AppError::with_source(
            ErrorKind::Unavailable,
            format!("{context}: database I/O failure"),
            err,
        ),
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}
