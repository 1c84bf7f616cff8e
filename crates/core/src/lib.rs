//! Core types for Taskpad.
//!
//! Everything here is pure and DOM-free so it can be tested natively:
//! - `task`: a single entry and its two-state completion machine
//! - `list`: the ordered, append-only task list
//! - `input`: the `InputField` seam and the add-task handler
//! - `error` / `result`: typed errors and the crate `Result` alias

#![forbid(unsafe_code)]

pub mod error;
pub mod input;
pub mod list;
pub mod result;
pub mod task;

pub use error::Error;
pub use input::{InputField, add_task, is_blank, is_form_whitespace};
pub use list::TaskList;
pub use result::{Result, ResultExt};
pub use task::{TaskEntry, TaskId, TaskState};
