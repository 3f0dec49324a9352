//! API request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tasksvc_domain::{Task, TaskDraft, ValidationError, ValidationResult};
use utoipa::ToSchema;

/// Task create/update body
///
/// Absent or `null` fields read as empty; unknown fields (including `id`,
/// `createdAt`, `updatedAt`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TaskPayload {
    /// Task title
    pub title: Option<String>,
    /// Task description
    pub description: Option<String>,
    /// Task status; blank on create defaults to `New`
    pub status: Option<String>,
}

impl TaskPayload {
    /// Decode a parsed body; anything but a JSON object is rejected
    pub fn from_json(value: Value) -> ValidationResult<Self> {
        if !value.is_object() {
            return Err(ValidationError::InvalidPayload);
        }
        serde_json::from_value(value).map_err(|_| ValidationError::InvalidPayload)
    }
}

impl From<TaskPayload> for TaskDraft {
    fn from(payload: TaskPayload) -> Self {
        TaskDraft::new(
            payload.title.unwrap_or_default(),
            payload.description.unwrap_or_default(),
            payload.status.unwrap_or_default(),
        )
    }
}

/// Task representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task ID
    pub id: String,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Status
    pub status: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// Task list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskListResponse {
    /// Total count
    pub total: usize,
    /// Every task
    pub tasks: Vec<TaskResponse>,
}

/// Task creation response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskCreatedResponse {
    /// Identifier of the new task
    pub id: String,
}

/// Error envelope shared by every 4xx/5xx response except the auth gate's
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `Error`
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Structured detail, omitted when empty
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub additional_info: Option<Map<String, Value>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, additional_info: Option<Map<String, Value>>) -> Self {
        Self {
            status: "Error".to_string(),
            message: message.into(),
            additional_info: additional_info.filter(|info| !info.is_empty()),
        }
    }
}

/// Auth gate rejection body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthErrorResponse {
    /// Rejection reason
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
}
