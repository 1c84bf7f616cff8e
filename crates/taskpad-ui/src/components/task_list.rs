//! Task list container and its entries

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use taskpad_core::{ResultExt, TaskEntry, TaskId, TaskList, TaskState};

use crate::config::UiConfig;
use crate::dom::warn_error;
use crate::error::UiError;

/// CSS class string for an entry
#[must_use]
pub fn item_class(completed: bool, completed_class: &str) -> String {
    if completed {
        format!("task-item {completed_class}")
    } else {
        "task-item".to_string()
    }
}

/// The `<ul>` container; renders entries in insertion order
#[component]
pub fn TaskListView(tasks: RwSignal<TaskList>) -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();

    view! {
        <ul id=config.list_id class="task-items">
            <For
                each=move || tasks.with(TaskList::ids)
                key=|id| *id
                children=move |id| view! { <TaskItem id=id tasks=tasks /> }
            />
        </ul>
    }
}

/// One `<li>`; clicking it toggles its completed marker
#[component]
pub fn TaskItem(id: TaskId, tasks: RwSignal<TaskList>) -> impl IntoView {
    let completed_class = use_context::<UiConfig>()
        .unwrap_or_default()
        .completed_class;

    // Entry text never changes after creation
    let text = tasks.with_untracked(|list| {
        list.get(id)
            .map(|entry| entry.text().to_string())
            .unwrap_or_default()
    });
    let state = move || {
        tasks.with(|list| list.get(id).map_or(TaskState::Active, TaskEntry::state))
    };

    let on_click = move |_: MouseEvent| {
        tasks.update(|list| {
            list.toggle(id)
                .inspect_error(|e| warn_error(&UiError::from(e.clone())))
                .ok();
        });
    };

    view! {
        <li
            class=move || item_class(state().is_completed(), &completed_class)
            data-state=move || state().as_str()
            on:click=on_click
        >
            {text}
        </li>
    }
}
