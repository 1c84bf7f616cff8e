//! Core error types for task list operations.
//!
//! Blank input submitted through the add-task handler is not an error; it is
//! a silent no-op. These variants cover direct misuse of the list API.

use thiserror::Error;

use crate::task::TaskId;

/// Core error type for Taskpad operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("task text is blank")]
    BlankTask,

    #[error("task not found: {id}")]
    TaskNotFound { id: TaskId },
}

impl Error {
    /// Create a task-not-found error.
    #[must_use]
    pub const fn task_not_found(id: TaskId) -> Self {
        Self::TaskNotFound { id }
    }
}
