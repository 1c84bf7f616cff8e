//! Leptos UI components for the task list

pub mod summary;
pub mod task_form;
pub mod task_list;

pub use summary::{Summary, TaskSummary};
pub use task_form::TaskForm;
pub use task_list::{TaskItem, TaskListView};
