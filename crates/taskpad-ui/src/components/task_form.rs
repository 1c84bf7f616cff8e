//! Task input form: the add-task handler wired to the DOM

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use taskpad_core::{TaskId, TaskList, add_task};

use crate::config::UiConfig;
use crate::dom::{DomInput, warn_error};
use crate::error::{Result, UiError};

/// Run the add-task handler against the element behind `input_ref`.
///
/// Returns the new entry's id, or `None` when the input was blank. The list
/// signal is only notified when an entry was actually appended.
///
/// # Errors
///
/// Returns `UiError::ElementMissing` if `input_ref` is not mounted.
pub fn submit_task(
    input_ref: NodeRef<html::Input>,
    tasks: RwSignal<TaskList>,
    input_id: &str,
) -> Result<Option<TaskId>> {
    let element = input_ref
        .get_untracked()
        .ok_or_else(|| UiError::element_missing(input_id))?;
    let mut field = DomInput::new(element);

    let mut added = None;
    tasks.maybe_update(|list| {
        added = add_task(list, &mut field);
        added.is_some()
    });
    Ok(added)
}

/// Text input plus "Add" button. Submitting (button or Enter) adds a task.
#[component]
pub fn TaskForm(tasks: RwSignal<TaskList>) -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let input_ref = NodeRef::<html::Input>::new();
    let input_id = config.input_id.clone();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = submit_task(input_ref, tasks, &input_id) {
            warn_error(&e);
        }
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <input
                id=config.input_id
                type="text"
                autocomplete="off"
                placeholder=config.placeholder
                node_ref=input_ref
            />
            <button type="submit" class="btn-primary">
                {config.add_label}
            </button>
        </form>
    }
}
