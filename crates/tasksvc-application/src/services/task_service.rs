//! Task Application Service
//!
//! Maps validated drafts onto storage documents and delegates to the
//! gateway. Holds no state of its own between calls.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use tasksvc_domain::{Task, TaskDraft};
use tasksvc_persistence::mapper::{document_to_task, draft_to_changes, new_document};
use tasksvc_persistence::TaskGateway;

use crate::clock::{Clock, SystemClock};
use crate::correlation::CorrelationId;
use crate::errors::{ApplicationError, ApplicationResult};

/// Task use cases
///
/// Drafts handed to `create_task`/`update_task` must already have passed
/// domain validation.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Every task, in the order storage returns them
    async fn get_tasks(&self, cid: &CorrelationId) -> ApplicationResult<Vec<Task>>;

    async fn get_task_by_id(&self, cid: &CorrelationId, id: &str) -> ApplicationResult<Task>;

    /// Persist a new task and return its identifier
    async fn create_task(&self, cid: &CorrelationId, draft: TaskDraft) -> ApplicationResult<String>;

    /// Overwrite title, description and status; identity fields are untouched
    async fn update_task(
        &self,
        cid: &CorrelationId,
        draft: TaskDraft,
        id: &str,
    ) -> ApplicationResult<()>;

    async fn delete_task_by_id(&self, cid: &CorrelationId, id: &str) -> ApplicationResult<()>;
}

/// [`TaskService`] backed by a [`TaskGateway`]
pub struct DefaultTaskService<G: TaskGateway + ?Sized> {
    gateway: Arc<G>,
    clock: Arc<dyn Clock>,
}

impl<G: TaskGateway + ?Sized> DefaultTaskService<G> {
    /// Create a new DefaultTaskService with the wall clock
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_clock(gateway, Arc::new(SystemClock))
    }

    pub fn with_clock(gateway: Arc<G>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }
}

fn log_failure(cid: &CorrelationId, operation: &str, err: &ApplicationError) {
    match err {
        ApplicationError::NotFound(id) => {
            debug!(correlation_id = %cid, task_id = %id, "{}: task not found", operation)
        }
        ApplicationError::Persistence(e) => {
            error!(correlation_id = %cid, error = %e, "{} failed", operation)
        }
    }
}

#[async_trait]
impl<G: TaskGateway + ?Sized> TaskService for DefaultTaskService<G> {
    async fn get_tasks(&self, cid: &CorrelationId) -> ApplicationResult<Vec<Task>> {
        let documents = self.gateway.find_all().await.map_err(|e| {
            let err = ApplicationError::from(e);
            log_failure(cid, "get_tasks", &err);
            err
        })?;

        debug!(correlation_id = %cid, count = documents.len(), "Fetched tasks");
        Ok(documents.into_iter().map(document_to_task).collect())
    }

    async fn get_task_by_id(&self, cid: &CorrelationId, id: &str) -> ApplicationResult<Task> {
        let document = self.gateway.find_by_id(id).await.map_err(|e| {
            let err = ApplicationError::from(e);
            log_failure(cid, "get_task_by_id", &err);
            err
        })?;

        Ok(document_to_task(document))
    }

    async fn create_task(&self, cid: &CorrelationId, draft: TaskDraft) -> ApplicationResult<String> {
        let document = new_document(draft, self.clock.now());

        let id = self.gateway.insert(document).await.map_err(|e| {
            let err = ApplicationError::from(e);
            log_failure(cid, "create_task", &err);
            err
        })?;

        debug!(correlation_id = %cid, task_id = %id, "Created task");
        Ok(id)
    }

    async fn update_task(
        &self,
        cid: &CorrelationId,
        draft: TaskDraft,
        id: &str,
    ) -> ApplicationResult<()> {
        let changes = draft_to_changes(draft, self.clock.now());

        self.gateway.update_by_id(id, changes).await.map_err(|e| {
            let err = ApplicationError::from(e);
            log_failure(cid, "update_task", &err);
            err
        })?;

        debug!(correlation_id = %cid, task_id = %id, "Updated task");
        Ok(())
    }

    async fn delete_task_by_id(&self, cid: &CorrelationId, id: &str) -> ApplicationResult<()> {
        self.gateway.delete_by_id(id).await.map_err(|e| {
            let err = ApplicationError::from(e);
            log_failure(cid, "delete_task_by_id", &err);
            err
        })?;

        debug!(correlation_id = %cid, task_id = %id, "Deleted task");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, Utc};
    use tasksvc_persistence::{
        InMemoryTaskGateway, PersistenceError, PersistenceResult, TaskChanges, TaskDocument,
    };

    /// Gateway whose every call fails with a transport error
    struct UnavailableGateway;

    #[async_trait]
    impl TaskGateway for UnavailableGateway {
        async fn find_by_id(&self, _id: &str) -> PersistenceResult<TaskDocument> {
            Err(PersistenceError::StorageUnavailable("down".into()))
        }

        async fn find_all(&self) -> PersistenceResult<Vec<TaskDocument>> {
            Err(PersistenceError::StorageUnavailable("down".into()))
        }

        async fn insert(&self, _document: TaskDocument) -> PersistenceResult<String> {
            Err(PersistenceError::StorageUnavailable("down".into()))
        }

        async fn update_by_id(&self, _id: &str, _changes: TaskChanges) -> PersistenceResult<()> {
            Err(PersistenceError::StorageUnavailable("down".into()))
        }

        async fn delete_by_id(&self, _id: &str) -> PersistenceResult<()> {
            Err(PersistenceError::StorageUnavailable("down".into()))
        }
    }

    fn service() -> (DefaultTaskService<InMemoryTaskGateway>, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(Utc::now()));
        let service =
            DefaultTaskService::with_clock(Arc::new(InMemoryTaskGateway::new()), clock.clone());
        (service, clock)
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let (service, clock) = service();
        let cid = CorrelationId::generate();

        let id = service
            .create_task(&cid, TaskDraft::new("Write", "the report", "pending"))
            .await
            .unwrap();
        let task = service.get_task_by_id(&cid, &id).await.unwrap();

        assert_eq!(task.id, id);
        assert_eq!(task.title, "Write");
        assert_eq!(task.description, "the report");
        assert_eq!(task.status, "pending");
        assert_eq!(task.created_at, clock.now());
        assert_eq!(task.updated_at, clock.now());
    }

    #[tokio::test]
    async fn test_update_preserves_identity_fields() {
        let (service, clock) = service();
        let cid = CorrelationId::generate();
        let id = service
            .create_task(&cid, TaskDraft::new("a", "b", "New"))
            .await
            .unwrap();
        let created = service.get_task_by_id(&cid, &id).await.unwrap();

        clock.advance(Duration::minutes(5));
        service
            .update_task(&cid, TaskDraft::new("c", "d", "completed"), &id)
            .await
            .unwrap();

        let updated = service.get_task_by_id(&cid, &id).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.updated_at, clock.now());
        assert_eq!(updated.title, "c");
        assert_eq!(updated.status, "completed");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (service, _) = service();
        let cid = CorrelationId::generate();
        let id = service
            .create_task(&cid, TaskDraft::new("a", "b", "New"))
            .await
            .unwrap();

        service.delete_task_by_id(&cid, &id).await.unwrap();
        let err = service.get_task_by_id(&cid, &id).await.unwrap_err();
        assert!(err.is_not_found());

        // second delete of the same id still succeeds
        service.delete_task_by_id(&cid, &id).await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let (service, _) = service();
        let cid = CorrelationId::generate();
        let err = service.get_task_by_id(&cid, "nope").await.unwrap_err();
        assert_eq!(err, ApplicationError::NotFound("nope".into()));
    }

    #[tokio::test]
    async fn test_update_missing_task_is_not_found() {
        let (service, _) = service();
        let cid = CorrelationId::generate();
        let missing = tasksvc_persistence::ObjectId::new().to_hex();
        let err = service
            .update_task(&cid, TaskDraft::new("a", "b", "New"), &missing)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_get_tasks_keeps_storage_order() {
        let (service, _) = service();
        let cid = CorrelationId::generate();
        for title in ["one", "two", "three"] {
            service
                .create_task(&cid, TaskDraft::new(title, "d", "New"))
                .await
                .unwrap();
        }

        let titles: Vec<_> = service
            .get_tasks(&cid)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_storage_failures_propagate_unchanged() {
        let service = DefaultTaskService::new(Arc::new(UnavailableGateway));
        let cid = CorrelationId::generate();
        let expected =
            ApplicationError::Persistence(PersistenceError::StorageUnavailable("down".into()));

        assert_eq!(service.get_tasks(&cid).await.unwrap_err(), expected);
        assert_eq!(
            service
                .create_task(&cid, TaskDraft::new("a", "b", "New"))
                .await
                .unwrap_err(),
            expected
        );
        assert_eq!(
            service.delete_task_by_id(&cid, "x").await.unwrap_err(),
            expected
        );
    }

    #[tokio::test]
    async fn test_works_through_trait_object_gateway() {
        let gateway: Arc<dyn TaskGateway> = Arc::new(InMemoryTaskGateway::new());
        let service: Arc<dyn TaskService> = Arc::new(DefaultTaskService::new(gateway));
        let cid = CorrelationId::generate();

        service
            .create_task(&cid, TaskDraft::new("a", "b", "New"))
            .await
            .unwrap();
        assert_eq!(service.get_tasks(&cid).await.unwrap().len(), 1);
    }
}
