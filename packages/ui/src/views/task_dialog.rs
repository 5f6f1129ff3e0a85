use dioxus::prelude::*;
use store::{Priority, Status, User};

use super::ModalOverlay;
use crate::forms::TaskForm;

/// Create/edit dialog bound to the dashboard's buffered [`TaskForm`].
#[component]
pub fn TaskDialog(
    mut draft: Signal<TaskForm>,
    editing: bool,
    users: Vec<User>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let current = draft();
    let title = if editing { "Edit Task" } else { "Create New Task" }.to_string();

    rsx! {
        ModalOverlay {
            title,
            on_close: move |_| on_cancel.call(()),
            form {
                class: "task-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },

                label { class: "field-label", r#for: "task-title", "Title" }
                input {
                    id: "task-title",
                    class: "field",
                    r#type: "text",
                    value: current.title.clone(),
                    oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                }

                label { class: "field-label", r#for: "task-description", "Description" }
                textarea {
                    id: "task-description",
                    class: "field",
                    rows: 3,
                    value: current.description.clone(),
                    oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                }

                label { class: "field-label", r#for: "task-due", "Due Date" }
                input {
                    id: "task-due",
                    class: "field",
                    r#type: "date",
                    value: current.due_date.clone(),
                    oninput: move |evt: FormEvent| draft.write().due_date = evt.value(),
                }

                div {
                    class: "field-row",
                    div {
                        label { class: "field-label", r#for: "task-priority", "Priority" }
                        select {
                            id: "task-priority",
                            class: "field",
                            value: current.priority.as_str(),
                            onchange: move |evt: FormEvent| {
                                if let Some(priority) = Priority::parse(&evt.value()) {
                                    draft.write().priority = priority;
                                }
                            },
                            for p in Priority::ALL {
                                option { value: p.as_str(), selected: current.priority == p, "{p.label()}" }
                            }
                        }
                    }
                    div {
                        label { class: "field-label", r#for: "task-status", "Status" }
                        select {
                            id: "task-status",
                            class: "field",
                            value: current.status.as_str(),
                            onchange: move |evt: FormEvent| {
                                if let Some(status) = Status::parse(&evt.value()) {
                                    draft.write().status = status;
                                }
                            },
                            for s in Status::ALL {
                                option { value: s.as_str(), selected: current.status == s, "{s.label()}" }
                            }
                        }
                    }
                }

                label { class: "field-label", r#for: "task-assignee", "Assign To" }
                select {
                    id: "task-assignee",
                    class: "field",
                    value: current.assignee_id.clone(),
                    onchange: move |evt: FormEvent| draft.write().assignee_id = evt.value(),
                    option { value: "", selected: current.assignee_id.is_empty(), "None" }
                    for user in users {
                        option {
                            key: "{user.id}",
                            value: "{user.id}",
                            selected: current.assignee_id == user.id.to_string(),
                            "{user.username}"
                        }
                    }
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        if editing { "Update" } else { "Create" }
                    }
                }
            }
        }
    }
}
