//! The server round-trips behind each screen.
//!
//! Views call these with an [`api::ApiClient`]; every function is generic
//! over [`Backend`] and reduces failures to the single message the page shows.

use api::{ApiError, Backend};
use store::{Session, Task, TaskFilter, User};

use crate::forms::{LoginForm, ProfileForm, RegisterForm, TaskForm};

pub const GENERIC_ERROR: &str = "An error occurred";
pub const PROFILE_FETCH_ERROR: &str = "Failed to fetch profile";
pub const PROFILE_UPDATE_ERROR: &str = "Failed to update profile";
pub const PROFILE_SAVED: &str = "Profile updated successfully";
pub const TASKS_FETCH_ERROR: &str = "Failed to fetch tasks";
pub const TASK_CREATE_ERROR: &str = "Failed to create task";
pub const TASK_UPDATE_ERROR: &str = "Failed to update task";
pub const TASK_DELETE_ERROR: &str = "Failed to delete task";

fn message(context: &str, fallback: &str, err: ApiError) -> String {
    tracing::warn!("{} failed: {}", context, err);
    err.user_message(fallback)
}

/// Register an account. A password mismatch fails without calling the server.
pub async fn sign_up<B: Backend>(backend: &B, form: &RegisterForm) -> Result<(), String> {
    let request = form.validate().map_err(str::to_string)?;
    backend
        .register(&request)
        .await
        .map_err(|e| message("register", GENERIC_ERROR, e))
}

pub async fn sign_in<B: Backend>(backend: &B, form: &LoginForm) -> Result<Session, String> {
    let response = backend
        .login(&form.to_request())
        .await
        .map_err(|e| message("login", GENERIC_ERROR, e))?;
    tracing::info!("Signed in as {}", response.user.username);
    Ok(response.into())
}

/// Fetch the profile. The server's reason is logged, not shown.
pub async fn load_profile<B: Backend>(backend: &B) -> Result<User, String> {
    backend.get_profile().await.map_err(|e| {
        tracing::warn!("profile fetch failed: {}", e);
        PROFILE_FETCH_ERROR.to_string()
    })
}

pub async fn save_profile<B: Backend>(backend: &B, form: &ProfileForm) -> Result<User, String> {
    backend
        .update_profile(&form.to_update())
        .await
        .map_err(|e| message("profile update", PROFILE_UPDATE_ERROR, e))
}

pub async fn fetch_tasks<B: Backend>(backend: &B, filter: &TaskFilter) -> Result<Vec<Task>, String> {
    backend
        .list_tasks(filter)
        .await
        .map_err(|e| message("task list", TASKS_FETCH_ERROR, e))
}

/// The assignee roster. Any failure yields an empty list.
pub async fn fetch_roster<B: Backend>(backend: &B) -> Vec<User> {
    match backend.list_users().await {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!("user list unavailable: {}", e);
            Vec::new()
        }
    }
}

/// Save the task dialog: update `editing` when set, otherwise create a task
/// owned by `creator_id`.
pub async fn submit_task<B: Backend>(
    backend: &B,
    editing: Option<i64>,
    form: &TaskForm,
    creator_id: Option<i64>,
) -> Result<Task, String> {
    match editing {
        Some(id) => backend
            .update_task(id, &form.to_payload(None))
            .await
            .map_err(|e| message("task update", TASK_UPDATE_ERROR, e)),
        None => backend
            .create_task(&form.to_payload(creator_id))
            .await
            .map_err(|e| message("task create", TASK_CREATE_ERROR, e)),
    }
}

pub async fn delete_task<B: Backend>(backend: &B, id: i64) -> Result<(), String> {
    backend
        .delete_task(id)
        .await
        .map_err(|e| message("task delete", TASK_DELETE_ERROR, e))
}
