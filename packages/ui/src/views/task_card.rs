use dioxus::prelude::*;
use store::Task;

use crate::badge::{priority_color, status_color};
use crate::icons::{FaCalendar, FaPen, FaTrash, FaUser};
use crate::Icon;

/// One task in the dashboard grid.
#[component]
pub fn TaskCard(
    task: Task,
    /// Username of the assignee, when known.
    #[props(!optional)]
    assignee: Option<String>,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = task.id;
    let edit_target = task.clone();
    let description = task.description.clone().filter(|d| !d.is_empty());

    rsx! {
        div {
            class: "task-card",
            div {
                class: "task-card-header",
                h3 { class: "task-title", "{task.title}" }
                div {
                    class: "task-actions",
                    button {
                        class: "icon-btn",
                        title: "Edit",
                        onclick: move |_| on_edit.call(edit_target.clone()),
                        Icon { width: 14, height: 14, icon: FaPen }
                    }
                    button {
                        class: "icon-btn icon-btn-danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(id),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }
            }
            if let Some(text) = description {
                p { class: "task-description", "{text}" }
            }
            div {
                class: "task-badges",
                span { class: priority_color(task.priority).class(), "{task.priority.label()}" }
                span { class: status_color(task.status).class(), "{task.status.label()}" }
            }
            if let Some(due) = task.due_label() {
                p {
                    class: "task-meta",
                    Icon { width: 12, height: 12, icon: FaCalendar }
                    "Due: {due}"
                }
            }
            if let Some(name) = assignee {
                p {
                    class: "task-meta",
                    Icon { width: 12, height: 12, icon: FaUser }
                    "Assigned to: {name}"
                }
            }
        }
    }
}
