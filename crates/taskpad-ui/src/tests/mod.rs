//! Behavioral tests for UI components
//!
//! BDD-style tests using given-when-then naming. They exercise the pure
//! pieces the components are built from; DOM rendering is covered by the
//! wasm suite in `components::task_form_test`.

pub mod config_behaviors;
