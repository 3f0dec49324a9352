//! Task entity and the rules applied to client-supplied task fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// Externally visible task
///
/// `id`, `created_at` and `updated_at` are server-assigned. Field names
/// serialize in camelCase to match the public JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier assigned by storage
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The client-editable fields of a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: String,
}

/// Status vocabulary recognized by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "New")]
    New,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    /// Status stored when a task is created with a blank status
    pub const DEFAULT: TaskStatus = TaskStatus::New;

    /// Wire values of every recognized status
    pub const RECOGNIZED: [&'static str; 4] = ["New", "pending", "in-progress", "completed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::New => "New",
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Exact (case-sensitive) match against the recognized wire values
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "New" => Some(TaskStatus::New),
            "pending" => Some(TaskStatus::Pending),
            "in-progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strictly a non-blank status is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Any non-blank status is stored as given
    #[default]
    Lenient,
    /// Only the recognized statuses are accepted
    Strict,
}

/// True when the value is empty after trimming whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: status.into(),
        }
    }

    /// Rules for a new task: title, then description; a blank status
    /// becomes [`TaskStatus::DEFAULT`].
    pub fn validate_for_create(mut self, policy: StatusPolicy) -> ValidationResult<Self> {
        self.check_text_fields()?;
        if is_blank(&self.status) {
            self.status = TaskStatus::DEFAULT.as_str().to_string();
        }
        self.check_status_policy(policy)?;
        Ok(self)
    }

    /// Rules for replacing a task's fields: title, description and status
    /// are all required, reported in that order.
    pub fn validate_for_update(mut self, policy: StatusPolicy) -> ValidationResult<Self> {
        self.check_text_fields()?;
        if is_blank(&self.status) {
            return Err(ValidationError::MissingStatus);
        }
        self.check_status_policy(policy)?;
        Ok(self)
    }

    fn check_text_fields(&self) -> ValidationResult<()> {
        if is_blank(&self.title) {
            return Err(ValidationError::MissingTitle);
        }
        if is_blank(&self.description) {
            return Err(ValidationError::MissingDescription);
        }
        Ok(())
    }

    /// Under [`StatusPolicy::Strict`] the stored status is the canonical
    /// spelling, never the padded input.
    fn check_status_policy(&mut self, policy: StatusPolicy) -> ValidationResult<()> {
        if policy == StatusPolicy::Strict {
            match TaskStatus::parse(&self.status) {
                Some(status) => self.status = status.as_str().to_string(),
                None => {
                    return Err(ValidationError::UnrecognizedStatus {
                        status: self.status.clone(),
                    })
                }
            }
        }
        Ok(())
    }
}
