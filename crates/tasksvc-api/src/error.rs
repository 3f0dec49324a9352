//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tasksvc_application::ApplicationError;
use tasksvc_domain::ValidationError;
use thiserror::Error;

use crate::models::ErrorResponse;

/// API error types
///
/// The display text of each variant is exactly what the client receives.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Task not found")]
    NotFound,

    /// Storage failure, reported with a fixed per-operation message
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Map a service failure; anything but not-found becomes `message`
    pub fn from_service(err: ApplicationError, message: &'static str) -> Self {
        match err {
            ApplicationError::NotFound(_) => ApiError::NotFound,
            ApplicationError::Persistence(_) => ApiError::Internal(message),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let additional_info = match &self {
            ApiError::Validation(e) => e.additional_info(),
            _ => None,
        };
        let body = ErrorResponse::new(self.to_string(), additional_info);

        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tasksvc_persistence::PersistenceError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationError::MissingTitle).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("Failed to fetch task").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_detail_is_not_exposed() {
        let err = ApiError::from_service(
            ApplicationError::Persistence(PersistenceError::OperationFailed(
                "secret internals".into(),
            )),
            "Failed to create task",
        );
        assert_eq!(err.to_string(), "Failed to create task");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from_service(ApplicationError::NotFound("x".into()), "ignored");
        assert!(matches!(err, ApiError::NotFound));
        assert_eq!(err.to_string(), "Task not found");
    }
}
