//! Task API handlers
//!
//! Validation happens here and ends here: a request that fails a field or
//! identifier rule never reaches the [`TaskService`](tasksvc_application::TaskService).

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::Value;
use tasksvc_application::CorrelationId;
use tasksvc_domain::{is_blank, TaskDraft, ValidationError};

use crate::{
    error::{ApiError, ApiResult},
    models::{TaskCreatedResponse, TaskListResponse, TaskPayload, TaskResponse},
    state::AppState,
};

fn require_id(id: &str) -> ApiResult<&str> {
    if is_blank(id) {
        return Err(ValidationError::MissingTaskId.into());
    }
    Ok(id.trim())
}

/// Decode the body as JSON whatever its declared content type
fn parse_payload(cid: &CorrelationId, body: &[u8]) -> ApiResult<TaskDraft> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(correlation_id = %cid, error = %e, "Rejected task payload");
        ValidationError::InvalidPayload
    })?;
    Ok(TaskPayload::from_json(value)?.into())
}

/// List every task
#[utoipa::path(
    get,
    path = "/public/tasks",
    responses(
        (status = 200, description = "All tasks", body = TaskListResponse),
        (status = 500, description = "Failed to fetch tasks", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(cid): Extension<CorrelationId>,
) -> ApiResult<Json<TaskListResponse>> {
    let tasks = state
        .task_service
        .get_tasks(&cid)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch tasks"))?;

    let tasks: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();
    Ok(Json(TaskListResponse {
        total: tasks.len(),
        tasks,
    }))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task ID (24 hex characters)")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Task found", body = TaskResponse),
        (status = 400, description = "Task ID is required", body = crate::models::ErrorResponse),
        (status = 401, description = "Missing bearer token", body = crate::models::AuthErrorResponse),
        (status = 404, description = "Task not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Failed to fetch task", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    Extension(cid): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let id = require_id(&id)?;

    let task = state
        .task_service
        .get_task_by_id(&cid, id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch task"))?;

    Ok(Json(task.into()))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = TaskPayload,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Task created", body = TaskCreatedResponse),
        (status = 400, description = "Invalid payload or missing field", body = crate::models::ErrorResponse),
        (status = 401, description = "Missing bearer token", body = crate::models::AuthErrorResponse),
        (status = 500, description = "Failed to create task", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    Extension(cid): Extension<CorrelationId>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<TaskCreatedResponse>)> {
    let draft = parse_payload(&cid, &body)?.validate_for_create(state.status_policy)?;

    let id = state
        .task_service
        .create_task(&cid, draft)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to create task"))?;

    tracing::info!(correlation_id = %cid, task_id = %id, "Task created");
    Ok((StatusCode::CREATED, Json(TaskCreatedResponse { id })))
}

/// Replace a task's title, description and status
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task ID (24 hex characters)")),
    request_body = TaskPayload,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Task updated"),
        (status = 400, description = "Invalid payload or missing field", body = crate::models::ErrorResponse),
        (status = 401, description = "Missing bearer token", body = crate::models::AuthErrorResponse),
        (status = 404, description = "Task not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Failed to update task", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Extension(cid): Extension<CorrelationId>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<StatusCode> {
    let id = require_id(&id)?;
    let draft = parse_payload(&cid, &body)?.validate_for_update(state.status_policy)?;

    state
        .task_service
        .update_task(&cid, draft, id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to update task"))?;

    tracing::info!(correlation_id = %cid, task_id = %id, "Task updated");
    Ok(StatusCode::OK)
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task ID (24 hex characters)")),
    security(("bearer" = [])),
    responses(
        (status = 204, description = "Task deleted (or already absent)"),
        (status = 400, description = "Task ID is required", body = crate::models::ErrorResponse),
        (status = 401, description = "Missing bearer token", body = crate::models::AuthErrorResponse),
        (status = 404, description = "Malformed task ID", body = crate::models::ErrorResponse),
        (status = 500, description = "Failed to delete task", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(cid): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = require_id(&id)?;

    state
        .task_service
        .delete_task_by_id(&cid, id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to delete task"))?;

    tracing::info!(correlation_id = %cid, task_id = %id, "Task deleted");
    Ok(StatusCode::NO_CONTENT)
}
