//! Ordered, append-only task list

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::input::is_blank;
use crate::result::Result;
use crate::task::{TaskEntry, TaskId, TaskState};

/// Task entries in insertion order.
///
/// Entries are only ever appended and toggled. Every entry held was non-blank
/// when it was created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaskEntry>", into = "Vec<TaskEntry>")]
pub struct TaskList {
    entries: Vec<TaskEntry>,
}

impl TryFrom<Vec<TaskEntry>> for TaskList {
    type Error = Error;

    fn try_from(entries: Vec<TaskEntry>) -> Result<Self> {
        if entries.iter().any(|e| is_blank(e.text())) {
            return Err(Error::BlankTask);
        }
        Ok(Self { entries })
    }
}

impl From<TaskList> for Vec<TaskEntry> {
    fn from(list: TaskList) -> Self {
        list.entries
    }
}

impl TaskList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an active entry with `text` as the last element.
    ///
    /// # Errors
    ///
    /// Returns `Error::BlankTask` if `text` is empty or whitespace-only.
    pub fn push(&mut self, text: impl Into<String>) -> Result<TaskId> {
        let text = text.into();
        if is_blank(&text) {
            return Err(Error::BlankTask);
        }

        let id = TaskId::new(self.entries.len());
        self.entries.push(TaskEntry::new(text));
        tracing::debug!(%id, "task appended");
        Ok(id)
    }

    /// Flips the completed marker of the entry at `id`.
    ///
    /// # Errors
    ///
    /// Returns `Error::TaskNotFound` if the list holds no entry at `id`.
    pub fn toggle(&mut self, id: TaskId) -> Result<TaskState> {
        let entry = self
            .entries
            .get_mut(id.position())
            .ok_or(Error::task_not_found(id))?;
        let state = entry.toggle();
        tracing::debug!(%id, %state, "task toggled");
        Ok(state)
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&TaskEntry> {
        self.entries.get(id.position())
    }

    #[must_use]
    pub fn entries(&self) -> &[TaskEntry] {
        &self.entries
    }

    /// Entries paired with their ids, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &TaskEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (TaskId::new(position), entry))
    }

    /// All ids in insertion order
    #[must_use]
    pub fn ids(&self) -> Vec<TaskId> {
        (0..self.entries.len()).map(TaskId::new).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_completed()).count()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_completed()).count()
    }
}
