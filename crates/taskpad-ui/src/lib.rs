//! Leptos 0.7 CSR frontend for Taskpad
//!
//! A single-page task list: type a task, add it, click an entry to toggle
//! its completed marker. Nothing is persisted.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown), built with Trunk
//! - Task state lives in one `RwSignal<TaskList>` owned by `App`
//!
//! ## Module Structure
//! - `app`: Root component
//! - `components`: Form, list, item, and summary components
//! - `config`: UI configuration and its defaults
//! - `dom`: `web-sys` glue (input adapter, console logging, config loading)
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;

#[cfg(test)]
mod tests;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;
pub use config::UiConfig;
pub use error::UiError;
