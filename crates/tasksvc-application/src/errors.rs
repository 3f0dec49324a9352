//! Application layer error types

use tasksvc_persistence::PersistenceError;
use thiserror::Error;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
///
/// Identifier problems (malformed or unknown) are folded into `NotFound`;
/// every other storage failure is carried through unchanged for logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// Task does not exist or the identifier cannot name one
    #[error("Task not found: {0}")]
    NotFound(String),

    /// Storage failure
    #[error(transparent)]
    Persistence(PersistenceError),
}

impl ApplicationError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::NotFound(_))
    }
}

impl From<PersistenceError> for ApplicationError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { id } | PersistenceError::InvalidIdentifier { id, .. } => {
                ApplicationError::NotFound(id)
            }
            other => ApplicationError::Persistence(other),
        }
    }
}
