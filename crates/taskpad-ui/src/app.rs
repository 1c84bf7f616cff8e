//! Main application component

use leptos::prelude::*;
use taskpad_core::TaskList;

use crate::components::{TaskForm, TaskListView, TaskSummary};
use crate::config::UiConfig;

/// Root component. Owns the task list signal and provides `UiConfig` to
/// its children through context.
#[component]
pub fn App(#[prop(optional)] config: UiConfig) -> impl IntoView {
    let tasks = RwSignal::new(TaskList::new());
    let title = config.title.clone();
    provide_context(config);

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>{title}</h1>
            </header>
            <main class="app-main">
                <TaskForm tasks=tasks />
                <TaskListView tasks=tasks />
            </main>
            <TaskSummary tasks=tasks />
        </div>
    }
}
