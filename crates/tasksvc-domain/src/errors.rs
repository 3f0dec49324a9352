//! Validation errors for client-supplied task data

use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::task::TaskStatus;

/// A client-supplied value failed a precondition.
///
/// The `Display` output is the exact message returned to the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("Task ID is required")]
    MissingTaskId,

    #[error("Title is required")]
    MissingTitle,

    #[error("Description is required")]
    MissingDescription,

    #[error("Status is required")]
    MissingStatus,

    #[error("Status must be one of: {}", TaskStatus::RECOGNIZED.join(", "))]
    UnrecognizedStatus { status: String },
}

impl ValidationError {
    /// Extra structured detail for the error envelope, if any
    pub fn additional_info(&self) -> Option<Map<String, Value>> {
        match self {
            ValidationError::UnrecognizedStatus { status } => {
                let mut info = Map::new();
                info.insert("status".to_string(), json!(status));
                info.insert("allowed".to_string(), json!(TaskStatus::RECOGNIZED));
                Some(info)
            }
            _ => None,
        }
    }
}

/// Result type alias for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
