//! UI configuration
//!
//! Element ids, labels, and the completed-marker class. Every field has a
//! default, so a page config only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

/// Configuration for the task list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub input_id: String,
    pub list_id: String,
    pub placeholder: String,
    pub add_label: String,
    pub completed_class: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Task List".to_string(),
            input_id: "taskInput".to_string(),
            list_id: "taskList".to_string(),
            placeholder: "Add a new task...".to_string(),
            add_label: "Add".to_string(),
            completed_class: "completed".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON config
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfig` if the JSON is malformed or a field
    /// has the wrong type, or if an element id or the completed class is blank.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| UiError::InvalidConfig(e.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self> {
        let required = [
            ("input_id", &self.input_id),
            ("list_id", &self.list_id),
            ("completed_class", &self.completed_class),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(UiError::InvalidConfig(format!("{field} must not be blank")));
        }
        Ok(self)
    }
}
