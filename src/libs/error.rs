//! Error taxonomy for the task core.
//!
//! Three failure classes cross the core's boundary: validation rejects
//! (blank titles), lookups of ids that no longer exist, and failures of the
//! underlying SQLite store. All of them end up as user-visible text on the
//! view state's `error` field; none of them crash the process.

use thiserror::Error;

/// Error type shared by the repository, operations, and view-state layers.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Input rejected before it reached the store.
    #[error("{0}")]
    Validation(String),

    /// A mutation addressed an id that is not present in the store.
    #[error("Task with id {0} not found")]
    NotFound(i64),

    /// A persisted timestamp column holds a value outside the representable
    /// range. Only reachable with a hand-edited database file.
    #[error("Invalid timestamp {0} in task store")]
    InvalidTimestamp(i64),

    /// The store behind a live subscription has been dropped.
    #[error("Task store closed")]
    Closed,

    /// Underlying persistence failure, surfaced verbatim and never retried.
    #[error(transparent)]
    Store(#[from] rusqlite::Error),
}

impl TaskError {
    /// The one validation rule the core enforces: a task needs a title.
    pub fn empty_title() -> Self {
        TaskError::Validation("Title cannot be empty".to_string())
    }
}
