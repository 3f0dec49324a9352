//! Persisted shapes of a task

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::object_id::ObjectId;

/// A task document as stored in the task collection
///
/// Field names map 1:1 to the public task JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDocument {
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The mutable subset of a document sent by a partial update
///
/// Identifier and creation time are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskChanges {
    pub title: String,
    pub description: String,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

impl TaskDocument {
    /// Overwrite the mutable fields
    pub fn apply(&mut self, changes: TaskChanges) {
        self.title = changes.title;
        self.description = changes.description;
        self.status = changes.status;
        self.updated_at = changes.updated_at;
    }
}
