use super::empty_as_none;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" => Ok(Priority::Low),
            "medium" | "m" => Ok(Priority::Medium),
            "high" | "h" => Ok(Priority::High),
            other => Err(AppError::InvalidInput(format!(
                "priority '{other}' (expected low, medium or high)"
            ))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Completed,
}

impl Status {
    pub fn toggled(self) -> Self {
        match self {
            Status::Pending => Status::Completed,
            Status::Completed => Status::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Completed => "Completed",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Status::Pending)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub class_id: Option<String>,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
}

/// Input for `add_assignment`.
///
/// `status` is accepted for symmetry with the persisted shape but ignored:
/// new assignments always start as `Pending`.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub title: String,
    pub description: String,
    pub class_id: Option<String>,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: Option<Status>,
}

impl NewAssignment {
    pub fn new(title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            class_id: None,
            due_date,
            priority: Priority::default(),
            status: None,
        }
    }

    pub fn into_assignment(self, id: String) -> Assignment {
        Assignment {
            id,
            title: self.title,
            description: self.description,
            class_id: self.class_id.filter(|c| !c.trim().is_empty()),
            due_date: self.due_date,
            priority: self.priority,
            status: Status::Pending,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `Some(None)` clears the class reference.
    pub class_id: Option<Option<String>>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl AssignmentPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.class_id.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    pub fn apply(self, a: &mut Assignment) {
        if let Some(title) = self.title {
            a.title = title;
        }
        if let Some(description) = self.description {
            a.description = description;
        }
        if let Some(class_id) = self.class_id {
            a.class_id = class_id.filter(|c| !c.trim().is_empty());
        }
        if let Some(due_date) = self.due_date {
            a.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            a.priority = priority;
        }
        if let Some(status) = self.status {
            a.status = status;
        }
    }
}
