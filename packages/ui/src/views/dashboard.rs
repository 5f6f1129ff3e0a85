use dioxus::prelude::*;
use store::{Task, TaskFilter, User};

use super::{FilterBar, TaskCard, TaskDialog};
use crate::actions;
use crate::auth::{use_api_client, use_auth};
use crate::banner::{Banner, BannerKind};
use crate::forms::{FilterChange, TaskForm};
use crate::icons::FaPlus;
use crate::Icon;

/// Task dashboard: filter bar, task grid and the create/edit dialog.
///
/// Every list request runs as its own task and writes the list when it
/// resolves, so overlapping requests all land and the last to finish shows.
#[component]
pub fn DashboardView() -> Element {
    let auth = use_auth();
    let client = use_api_client();
    let mut tasks = use_signal(Vec::<Task>::new);
    let mut users = use_signal(Vec::<User>::new);
    let mut filter = use_signal(TaskFilter::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut dialog_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Task>::None);
    let mut draft = use_signal(TaskForm::default);

    let load_tasks = move |query: TaskFilter| {
        spawn(async move {
            match actions::fetch_tasks(&client(), &query).await {
                Ok(list) => tasks.set(list),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    use_hook(move || {
        load_tasks(TaskFilter::default());
        spawn(async move {
            users.set(actions::fetch_roster(&client()).await);
        });
    });

    let change_filter = move |change: FilterChange| {
        let mut next = filter();
        if change.apply(&mut next) {
            filter.set(next);
            load_tasks(next);
        }
    };

    let open_create = move |_| {
        editing.set(None);
        draft.set(TaskForm::default());
        dialog_open.set(true);
    };

    let open_edit = move |task: Task| {
        draft.set(TaskForm::from_task(&task));
        editing.set(Some(task));
        dialog_open.set(true);
    };

    let close_dialog = move |_| {
        dialog_open.set(false);
        editing.set(None);
    };

    let submit = move |_| {
        spawn(async move {
            let target = editing().map(|t| t.id);
            let creator = auth().user().map(|u| u.id);
            match actions::submit_task(&client(), target, &draft(), creator).await {
                Ok(saved) => {
                    tracing::info!("Saved task {}", saved.id);
                    dialog_open.set(false);
                    editing.set(None);
                    draft.set(TaskForm::default());
                    load_tasks(filter());
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let delete = move |id: i64| {
        spawn(async move {
            match actions::delete_task(&client(), id).await {
                Ok(()) => {
                    tracing::info!("Deleted task {}", id);
                    load_tasks(filter());
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let roster = users();

    rsx! {
        div {
            class: "dashboard",
            div {
                class: "dashboard-header",
                h1 { class: "page-title", "Task Dashboard" }
                button {
                    class: "btn btn-primary",
                    onclick: open_create,
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "New Task"
                }
            }

            if let Some(message) = error() {
                Banner {
                    kind: BannerKind::Error,
                    message,
                    on_dismiss: move |_| error.set(None),
                }
            }

            FilterBar { filter: filter(), on_change: change_filter }

            div {
                class: "task-grid",
                for task in tasks() {
                    TaskCard {
                        key: "{task.id}",
                        assignee: task
                            .assignee_id
                            .and_then(|id| roster.iter().find(|u| u.id == id))
                            .map(|u| u.username.clone()),
                        task: task.clone(),
                        on_edit: open_edit,
                        on_delete: delete,
                    }
                }
            }

            if dialog_open() {
                TaskDialog {
                    draft,
                    editing: editing().is_some(),
                    users: roster.clone(),
                    on_submit: submit,
                    on_cancel: close_dialog,
                }
            }
        }
    }
}
