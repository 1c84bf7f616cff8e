//! Error types for the Taskpad UI
//!
//! Event handlers terminate these by logging to the console; nothing is
//! surfaced to the user.

use thiserror::Error;

/// Errors that can occur in UI components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A `NodeRef` has not resolved to its DOM element
    #[error("element not found: #{id}")]
    ElementMissing { id: String },

    /// Page configuration could not be parsed
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Task list operation failed
    #[error(transparent)]
    Task(#[from] taskpad_core::Error),
}

impl UiError {
    pub fn element_missing(id: impl Into<String>) -> Self {
        Self::ElementMissing { id: id.into() }
    }
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
