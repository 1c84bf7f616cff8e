//! Footer summary of the task list

use std::fmt;

use leptos::prelude::*;
use taskpad_core::TaskList;

/// Entry counts shown in the footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
}

impl Summary {
    #[must_use]
    pub fn of(list: &TaskList) -> Self {
        Self {
            total: list.len(),
            completed: list.completed_count(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 { "task" } else { "tasks" };
        write!(f, "{} {}, {} completed", self.total, noun, self.completed)
    }
}

#[component]
pub fn TaskSummary(tasks: RwSignal<TaskList>) -> impl IntoView {
    let summary = Memo::new(move |_| tasks.with(Summary::of));

    view! {
        <footer class="task-summary">
            {move || summary.get().to_string()}
        </footer>
    }
}
