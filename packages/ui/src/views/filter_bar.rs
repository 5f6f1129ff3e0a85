use dioxus::prelude::*;
use store::{Priority, SortKey, Status, TaskFilter};

use crate::forms::FilterChange;

/// Status, priority and sort selects for the task list.
#[component]
pub fn FilterBar(filter: TaskFilter, on_change: EventHandler<FilterChange>) -> Element {
    let status = filter.status.map(|s| s.as_str()).unwrap_or("");
    let priority = filter.priority.map(|p| p.as_str()).unwrap_or("");
    let sort_by = filter.sort_by.as_str();

    rsx! {
        div {
            class: "filter-bar",
            label {
                class: "filter",
                span { "Status" }
                select {
                    value: status,
                    onchange: move |evt: FormEvent| on_change.call(FilterChange::status(&evt.value())),
                    option { value: "", selected: status.is_empty(), "All" }
                    for s in Status::ALL {
                        option { value: s.as_str(), selected: status == s.as_str(), "{s.label()}" }
                    }
                }
            }
            label {
                class: "filter",
                span { "Priority" }
                select {
                    value: priority,
                    onchange: move |evt: FormEvent| on_change.call(FilterChange::priority(&evt.value())),
                    option { value: "", selected: priority.is_empty(), "All" }
                    for p in Priority::ALL.into_iter().rev() {
                        option { value: p.as_str(), selected: priority == p.as_str(), "{p.label()}" }
                    }
                }
            }
            label {
                class: "filter",
                span { "Sort By" }
                select {
                    value: sort_by,
                    onchange: move |evt: FormEvent| on_change.call(FilterChange::sort_by(&evt.value())),
                    for key in SortKey::ALL {
                        option { value: key.as_str(), selected: sort_by == key.as_str(), "{key.label()}" }
                    }
                }
            }
        }
    }
}
