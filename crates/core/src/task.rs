//! Task entry model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Completion state of a task entry.
///
/// Two states with a single symmetric transition; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    #[default]
    Active,
    Completed,
}

impl TaskState {
    /// Returns the opposite state
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Active => Self::Completed,
            Self::Completed => Self::Active,
        }
    }

    /// Returns true if the completed marker is set
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Lowercase name, as serialized and as set on an entry's `data-state`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns the display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of an entry in its list.
///
/// Entries are append-only and never reordered, so the insertion position is
/// a stable handle for the lifetime of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(usize);

impl TaskId {
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Zero-based insertion position
    #[must_use]
    pub const fn position(self) -> usize {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single displayed task: its text and completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    text: String,
    state: TaskState,
}

impl TaskEntry {
    /// Creates an active entry. The text is kept exactly as given.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: TaskState::default(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    /// Flips the completed marker and returns the new state
    pub const fn toggle(&mut self) -> TaskState {
        self.state = self.state.toggle();
        self.state
    }
}
