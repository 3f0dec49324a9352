//! Persistence gateway interface
//!
//! Every id-taking operation receives the external string form and is
//! responsible for translating it; malformed ids fail with
//! [`PersistenceError::InvalidIdentifier`](crate::PersistenceError).

use async_trait::async_trait;

use crate::error::PersistenceResult;
use crate::record::{TaskChanges, TaskDocument};

/// Storage operations against the task collection
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Single-document lookup; a missing document is `NotFound`
    async fn find_by_id(&self, id: &str) -> PersistenceResult<TaskDocument>;

    /// Every document, unfiltered and unpaginated, in store order
    async fn find_all(&self) -> PersistenceResult<Vec<TaskDocument>>;

    /// Insert a document and return its identifier in external form
    async fn insert(&self, document: TaskDocument) -> PersistenceResult<String>;

    /// Overwrite only the mutable fields; a missing document is `NotFound`
    async fn update_by_id(&self, id: &str, changes: TaskChanges) -> PersistenceResult<()>;

    /// Hard delete; deleting a missing document succeeds
    async fn delete_by_id(&self, id: &str) -> PersistenceResult<()>;
}
