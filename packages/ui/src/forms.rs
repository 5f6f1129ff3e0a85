//! Form state for the auth, profile, and task screens.
//!
//! Each form holds exactly what its inputs show and converts to the request
//! body the server expects. Empty optional inputs become `null` on the wire.

use api::{LoginRequest, ProfileUpdate, RegisterRequest, TaskPayload};
use store::{Priority, SortKey, Status, Task, TaskFilter, User};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// The registration request, or the message to show instead of sending it.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH);
        }
        Ok(RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub profile_picture: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            profile_picture: user.profile_picture.clone().unwrap_or_default(),
        }
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            username: self.username.clone(),
            email: self.email.clone(),
            profile_picture: self.profile_picture.clone(),
        }
    }
}

/// The create/edit task dialog.
///
/// `due_date` is the `YYYY-MM-DD` value of a date input and `assignee_id` the
/// value of the assignee select; both are empty when unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub status: Status,
    pub assignee_id: String,
}

impl TaskForm {
    /// Pre-fill the dialog from an existing task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            due_date: task.due_input_value(),
            priority: match task.priority {
                Priority::Unknown => Priority::default(),
                known => known,
            },
            status: match task.status {
                Status::Unknown => Status::default(),
                known => known,
            },
            assignee_id: task
                .assignee_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }

    /// Body for create (with `creator_id`) or update (`None`).
    pub fn to_payload(&self, creator_id: Option<i64>) -> TaskPayload {
        let due_date = self.due_date.trim();
        TaskPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: (!due_date.is_empty()).then(|| due_date.to_string()),
            priority: self.priority,
            status: self.status,
            assignee_id: self.assignee_id.trim().parse().ok(),
            creator_id,
        }
    }
}

/// One edit to the dashboard filter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterChange {
    Status(Option<Status>),
    Priority(Option<Priority>),
    SortBy(SortKey),
}

impl FilterChange {
    /// From the status select; the empty option means "All".
    pub fn status(value: &str) -> Self {
        FilterChange::Status(Status::parse(value))
    }

    /// From the priority select; the empty option means "All".
    pub fn priority(value: &str) -> Self {
        FilterChange::Priority(Priority::parse(value))
    }

    pub fn sort_by(value: &str) -> Self {
        FilterChange::SortBy(SortKey::parse(value).unwrap_or_default())
    }

    /// Apply to `filter`. Returns `false` when nothing changed.
    pub fn apply(self, filter: &mut TaskFilter) -> bool {
        let before = *filter;
        match self {
            FilterChange::Status(status) => filter.status = status,
            FilterChange::Priority(priority) => filter.priority = priority,
            FilterChange::SortBy(sort_by) => filter.sort_by = sort_by,
        }
        *filter != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_requires_matching_passwords() {
        let form = RegisterForm {
            username: "erin".into(),
            email: "erin@example.org".into(),
            password: "one".into(),
            confirm_password: "two".into(),
        };
        assert_eq!(form.validate(), Err(PASSWORD_MISMATCH));

        let form = RegisterForm {
            confirm_password: "one".into(),
            ..form
        };
        let request = form.validate().unwrap();
        assert_eq!(request.username, "erin");
        assert_eq!(request.password, "one");
    }

    #[test]
    fn test_new_task_defaults() {
        let form = TaskForm::default();
        assert_eq!(form.priority, Priority::Medium);
        assert_eq!(form.status, Status::Pending);

        let payload = form.to_payload(Some(3));
        assert_eq!(payload.due_date, None);
        assert_eq!(payload.assignee_id, None);
        assert_eq!(payload.creator_id, Some(3));
    }

    #[test]
    fn test_edit_prefills_from_task() {
        let task = Task {
            id: 9,
            title: "Ship release".into(),
            description: None,
            due_date: Some("2024-03-05T00:00:00".into()),
            priority: Priority::High,
            status: Status::Unknown,
            created_at: None,
            assignee_id: Some(4),
            creator_id: Some(1),
        };
        let form = TaskForm::from_task(&task);
        assert_eq!(form.title, "Ship release");
        assert_eq!(form.description, "");
        assert_eq!(form.due_date, "2024-03-05");
        assert_eq!(form.status, Status::Pending);
        assert_eq!(form.assignee_id, "4");

        let payload = form.to_payload(None);
        assert_eq!(payload.due_date.as_deref(), Some("2024-03-05"));
        assert_eq!(payload.assignee_id, Some(4));
        assert_eq!(payload.creator_id, None);
    }

    #[test]
    fn test_profile_form_sends_empty_picture() {
        let user = User {
            id: 2,
            username: "sam".into(),
            email: "sam@example.org".into(),
            profile_picture: None,
            created_at: None,
            role: None,
        };
        let update = ProfileForm::from_user(&user).to_update();
        assert_eq!(update.username, "sam");
        assert_eq!(update.profile_picture, "");
    }

    #[test]
    fn test_filter_change_reports_no_op() {
        let mut filter = TaskFilter::default();
        assert!(FilterChange::status("completed").apply(&mut filter));
        assert_eq!(filter.status, Some(Status::Completed));

        assert!(!FilterChange::status("completed").apply(&mut filter));
        assert!(FilterChange::status("").apply(&mut filter));
        assert_eq!(filter.status, None);

        assert!(!FilterChange::sort_by("due_date").apply(&mut filter));
        assert!(FilterChange::sort_by("priority").apply(&mut filter));
        assert!(FilterChange::priority("low").apply(&mut filter));
        assert_eq!(
            filter.query_pairs(),
            [("status", ""), ("priority", "low"), ("sort_by", "priority")]
        );
    }
}
