use store::{Priority, Status};

/// Colour classes for priority and status badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeColor {
    Error,
    Warning,
    Success,
    Info,
    Default,
}

impl BadgeColor {
    pub fn class(self) -> &'static str {
        match self {
            BadgeColor::Error => "badge badge-error",
            BadgeColor::Warning => "badge badge-warning",
            BadgeColor::Success => "badge badge-success",
            BadgeColor::Info => "badge badge-info",
            BadgeColor::Default => "badge",
        }
    }
}

pub fn priority_color(priority: Priority) -> BadgeColor {
    match priority {
        Priority::High => BadgeColor::Error,
        Priority::Medium => BadgeColor::Warning,
        Priority::Low => BadgeColor::Success,
        Priority::Unknown => BadgeColor::Default,
    }
}

pub fn status_color(status: Status) -> BadgeColor {
    match status {
        Status::Completed => BadgeColor::Success,
        Status::InProgress => BadgeColor::Warning,
        Status::Pending => BadgeColor::Info,
        Status::Unknown => BadgeColor::Default,
    }
}
