use serde::{Deserialize, Serialize};
use store::{Priority, Status};

/// Body of `POST /api/tasks` and `PUT /api/tasks/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    /// `yyyy-MM-dd`; `None` leaves the server's value untouched on update.
    pub due_date: Option<String>,
    pub priority: Priority,
    pub status: Status,
    pub assignee_id: Option<i64>,
    /// Only sent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<i64>,
}
