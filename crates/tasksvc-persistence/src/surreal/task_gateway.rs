//! SurrealDB Task Gateway Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::{
    error::{PersistenceError, PersistenceResult},
    gateway::TaskGateway,
    mapper::parse_identifier,
    record::{TaskChanges, TaskDocument},
};

use super::connection::SharedConnection;

/// Default table holding task records
pub const DEFAULT_TABLE: &str = "tasks";

const SELECT_ONE: &str = "SELECT meta::id(id) AS id, title, description, status, createdAt, updatedAt \
     FROM type::thing($table, $id)";
const SELECT_ALL: &str = "SELECT meta::id(id) AS id, title, description, status, createdAt, updatedAt \
     FROM type::table($table)";
const CREATE: &str = "CREATE type::thing($table, $id) CONTENT $content RETURN NONE";
const UPDATE: &str = "UPDATE type::thing($table, $id) MERGE $changes \
     RETURN meta::id(id) AS id, title, description, status, createdAt, updatedAt";
const DELETE: &str = "DELETE type::thing($table, $id)";

/// Record body; the identifier lives in the record key
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    title: String,
    description: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TaskDocument> for StoredTask {
    fn from(document: TaskDocument) -> Self {
        Self {
            title: document.title,
            description: document.description,
            status: document.status,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

/// Helper to convert SurrealDB errors to PersistenceError
fn storage_error(e: surrealdb::Error) -> PersistenceError {
    if let surrealdb::Error::Api(api) = &e {
        return PersistenceError::StorageUnavailable(api.to_string());
    }
    PersistenceError::OperationFailed(e.to_string())
}

fn decode_error(e: surrealdb::Error) -> PersistenceError {
    PersistenceError::Serialization(e.to_string())
}

/// SurrealDB implementation of [`TaskGateway`]
pub struct SurrealTaskGateway {
    connection: SharedConnection,
    table: String,
}

impl SurrealTaskGateway {
    /// Create a gateway over `table`
    pub fn new(connection: SharedConnection, table: impl Into<String>) -> Self {
        Self {
            connection,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl TaskGateway for SurrealTaskGateway {
    async fn find_by_id(&self, id: &str) -> PersistenceResult<TaskDocument> {
        let object_id = parse_identifier(id)?;
        debug!("Finding task by id: {}", object_id);

        let mut response = self
            .connection
            .client()
            .query(SELECT_ONE)
            .bind(("table", self.table.clone()))
            .bind(("id", object_id.to_hex()))
            .await
            .map_err(storage_error)?
            .check()
            .map_err(storage_error)?;

        let records: Vec<TaskDocument> = response.take(0).map_err(decode_error)?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| PersistenceError::not_found(id))
    }

    async fn find_all(&self) -> PersistenceResult<Vec<TaskDocument>> {
        debug!("Finding all tasks in {}", self.table);

        let mut response = self
            .connection
            .client()
            .query(SELECT_ALL)
            .bind(("table", self.table.clone()))
            .await
            .map_err(storage_error)?
            .check()
            .map_err(storage_error)?;

        response.take(0).map_err(decode_error)
    }

    async fn insert(&self, document: TaskDocument) -> PersistenceResult<String> {
        let id = document.id.to_hex();
        debug!("Creating task {} in SurrealDB", id);

        self.connection
            .client()
            .query(CREATE)
            .bind(("table", self.table.clone()))
            .bind(("id", id.clone()))
            .bind(("content", StoredTask::from(document)))
            .await
            .map_err(storage_error)?
            .check()
            .map_err(storage_error)?;

        Ok(id)
    }

    async fn update_by_id(&self, id: &str, changes: TaskChanges) -> PersistenceResult<()> {
        let object_id = parse_identifier(id)?;
        debug!("Updating task {} in SurrealDB", object_id);

        let mut response = self
            .connection
            .client()
            .query(UPDATE)
            .bind(("table", self.table.clone()))
            .bind(("id", object_id.to_hex()))
            .bind(("changes", changes))
            .await
            .map_err(storage_error)?
            .check()
            .map_err(storage_error)?;

        let updated: Vec<TaskDocument> = response.take(0).map_err(decode_error)?;
        if updated.is_empty() {
            return Err(PersistenceError::not_found(id));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> PersistenceResult<()> {
        let object_id = parse_identifier(id)?;
        debug!("Deleting task {} from SurrealDB", object_id);

        self.connection
            .client()
            .query(DELETE)
            .bind(("table", self.table.clone()))
            .bind(("id", object_id.to_hex()))
            .await
            .map_err(storage_error)?
            .check()
            .map_err(storage_error)?;

        Ok(())
    }
}
