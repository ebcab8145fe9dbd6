//! Typed error surface of the planner store.
//!
//! Every fallible store operation returns [`Result`]. The variants a caller
//! is expected to match on are the domain rejections (`DuplicateUser`,
//! `UserNotFound`, `TaskNotFound`, `EmptyTask`); database and IO failures
//! pass through transparently.

use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// Registration rejected because the username is already taken.
    #[error("username '{0}' is already taken")]
    DuplicateUser(String),

    /// Sign-in rejected. Deliberately the same value whether the username
    /// is unknown or the password is wrong.
    #[error("user not found")]
    UserNotFound,

    /// Status update addressed a task id that does not exist.
    #[error("task {0} not found")]
    TaskNotFound(i64),

    /// Task text was empty or whitespace-only; nothing was persisted.
    #[error("task text must not be empty")]
    EmptyTask,

    /// A stored or supplied status string is outside the fixed set.
    #[error("invalid task status '{0}'")]
    InvalidStatus(String),

    /// A stored or supplied category string is outside the fixed set.
    #[error("invalid task category '{0}'")]
    InvalidCategory(String),

    /// Password hashing or digest verification failed structurally
    /// (e.g. a corrupt PHC string); not a wrong-password signal.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
