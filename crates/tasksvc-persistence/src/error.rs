//! Persistence Layer Error Types

use thiserror::Error;

/// Errors surfaced by a [`TaskGateway`](crate::TaskGateway)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    /// The external id string is not a valid storage identifier
    #[error("Invalid identifier '{id}': {reason}")]
    InvalidIdentifier { id: String, reason: String },

    /// No document exists for the identifier
    #[error("Task not found: {id}")]
    NotFound { id: String },

    /// Connection or transport failure
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Store-side failure of an otherwise well-formed operation
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// A stored document could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PersistenceError {
    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// True when the identifier does not parse or does not resolve
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidIdentifier { .. })
    }
}

/// Result type alias for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = PersistenceError::not_found("650c1f1e2a3b4c5d6e7f8091");
        assert!(err.to_string().contains("650c1f1e2a3b4c5d6e7f8091"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_identifier_counts_as_not_found() {
        let err = PersistenceError::invalid_identifier("xyz", "expected 24 hex characters");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_storage_errors_are_not_not_found() {
        assert!(!PersistenceError::StorageUnavailable("refused".into()).is_not_found());
        assert!(!PersistenceError::OperationFailed("boom".into()).is_not_found());
    }
}
