//! # Domain models for users, tasks, and dashboard filters
//!
//! Defines the records exchanged with the task REST API. Every type is
//! `Serialize + Deserialize` so the same struct crosses the wire and the
//! browser's local storage unchanged.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | An account as returned by the profile, login, and roster endpoints. |
//! | [`Task`] | A unit of work with due date, [`Priority`], [`Status`], and optional assignee. |
//! | [`Priority`] / [`Status`] | Closed value sets; unknown server strings map to an `Unknown` variant instead of failing the whole list. |
//! | [`SortKey`] | Server-side ordering of the task list. |
//! | [`TaskFilter`] | The dashboard's transient filter/sort selection, flattened into query parameters by [`TaskFilter::query_pairs`]. |
//!
//! ## Dates
//!
//! The server sends due dates as naive ISO-8601 datetimes (`2024-05-01T00:00:00`).
//! [`parse_due_date`] accepts that form, RFC 3339, and a bare `yyyy-MM-dd`;
//! [`Task::due_label`] and [`Task::due_input_value`] format the result for cards
//! and for `<input type="date">` respectively.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// An account known to the task service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Avatar reference (URL). May be a session-only object URL.
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// `"user"` or `"admin"`.
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

impl Priority {
    /// Selectable priorities, in the order the task form lists them.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Unknown => "Unknown",
        }
    }

    /// Parse a known wire value. `Unknown` is never produced here.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
    #[serde(other)]
    Unknown,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
            Status::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A task as returned by the list/create/update endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<i64>,
    #[serde(default)]
    pub creator_id: Option<i64>,
}

impl Task {
    /// Due date for display on a card, e.g. `May 01, 2024`.
    ///
    /// Falls back to the raw server string when it cannot be parsed.
    pub fn due_label(&self) -> Option<String> {
        let raw = self.due_date.as_deref().filter(|d| !d.is_empty())?;
        Some(match parse_due_date(raw) {
            Some(date) => date.format("%b %d, %Y").to_string(),
            None => raw.to_string(),
        })
    }

    /// Due date in `yyyy-MM-dd` form for a date input; empty when absent or unparseable.
    pub fn due_input_value(&self) -> String {
        self.due_date
            .as_deref()
            .and_then(parse_due_date)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Parse a due date in any of the forms the task API produces or accepts.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Server-side ordering for the task list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    DueDate,
    Priority,
    CreatedAt,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::DueDate, SortKey::Priority, SortKey::CreatedAt];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DueDate => "due_date",
            SortKey::Priority => "priority",
            SortKey::CreatedAt => "created_at",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DueDate => "Due Date",
            SortKey::Priority => "Priority",
            SortKey::CreatedAt => "Created At",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }
}

/// The dashboard's filter and sort selection.
///
/// `None` means "no filter" for that field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub sort_by: SortKey,
}

impl TaskFilter {
    /// Query parameters for `GET /api/tasks`.
    ///
    /// All three keys are always present; an unset filter is sent as an empty value,
    /// which the server treats as "match everything".
    pub fn query_pairs(&self) -> [(&'static str, &'static str); 3] {
        [
            ("status", self.status.map(|s| s.as_str()).unwrap_or("")),
            ("priority", self.priority.map(|p| p.as_str()).unwrap_or("")),
            ("sort_by", self.sort_by.as_str()),
        ]
    }
}
