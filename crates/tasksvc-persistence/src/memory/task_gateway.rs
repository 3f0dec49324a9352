//! In-Memory Task Gateway

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::{
    error::{PersistenceError, PersistenceResult},
    gateway::TaskGateway,
    mapper::parse_identifier,
    object_id::ObjectId,
    record::{TaskChanges, TaskDocument},
};

/// Thread-safe in-memory implementation of [`TaskGateway`]
///
/// Documents are kept in identifier order, which within one process is
/// creation order.
#[derive(Debug, Default)]
pub struct InMemoryTaskGateway {
    documents: RwLock<BTreeMap<ObjectId, TaskDocument>>,
}

impl InMemoryTaskGateway {
    /// Create a new empty gateway
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create with initial documents (useful for testing)
    pub fn with_documents(documents: Vec<TaskDocument>) -> Self {
        let map = documents.into_iter().map(|d| (d.id, d)).collect();
        Self {
            documents: RwLock::new(map),
        }
    }

    /// Get the current count of documents (for testing)
    pub fn count(&self) -> usize {
        self.documents.read().len()
    }

    /// Clear all documents (for testing)
    pub fn clear(&self) {
        self.documents.write().clear();
    }
}

#[async_trait]
impl TaskGateway for InMemoryTaskGateway {
    async fn find_by_id(&self, id: &str) -> PersistenceResult<TaskDocument> {
        let object_id = parse_identifier(id)?;
        self.documents
            .read()
            .get(&object_id)
            .cloned()
            .ok_or_else(|| PersistenceError::not_found(id))
    }

    async fn find_all(&self) -> PersistenceResult<Vec<TaskDocument>> {
        Ok(self.documents.read().values().cloned().collect())
    }

    async fn insert(&self, document: TaskDocument) -> PersistenceResult<String> {
        let mut documents = self.documents.write();
        if documents.contains_key(&document.id) {
            return Err(PersistenceError::OperationFailed(format!(
                "duplicate key: {}",
                document.id
            )));
        }
        let id = document.id.to_hex();
        debug!(task_id = %id, "Inserted task document");
        documents.insert(document.id, document);
        Ok(id)
    }

    async fn update_by_id(&self, id: &str, changes: TaskChanges) -> PersistenceResult<()> {
        let object_id = parse_identifier(id)?;
        let mut documents = self.documents.write();
        let document = documents
            .get_mut(&object_id)
            .ok_or_else(|| PersistenceError::not_found(id))?;
        document.apply(changes);
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> PersistenceResult<()> {
        let object_id = parse_identifier(id)?;
        self.documents.write().remove(&object_id);
        Ok(())
    }
}
