//! Conversions between the domain task and its storage record
//!
//! This module is the only place external id strings become [`ObjectId`]s.

use chrono::{DateTime, Utc};
use tasksvc_domain::{Task, TaskDraft};

use crate::error::{PersistenceError, PersistenceResult};
use crate::object_id::ObjectId;
use crate::record::{TaskChanges, TaskDocument};

/// Translate an external id into a storage identifier
pub fn parse_identifier(id: &str) -> PersistenceResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| PersistenceError::invalid_identifier(id, e.to_string()))
}

/// Build a fresh document for a validated draft
pub fn new_document(draft: TaskDraft, now: DateTime<Utc>) -> TaskDocument {
    TaskDocument {
        id: ObjectId::new(),
        title: draft.title,
        description: draft.description,
        status: draft.status,
        created_at: now,
        updated_at: now,
    }
}

/// Build the partial update for a validated draft
pub fn draft_to_changes(draft: TaskDraft, now: DateTime<Utc>) -> TaskChanges {
    TaskChanges {
        title: draft.title,
        description: draft.description,
        status: draft.status,
        updated_at: now,
    }
}

/// Convert a stored document into the external representation
pub fn document_to_task(document: TaskDocument) -> Task {
    Task {
        id: document.id.to_hex(),
        title: document.title,
        description: document.description,
        status: document.status,
        created_at: document.created_at,
        updated_at: document.updated_at,
    }
}

impl From<TaskDocument> for Task {
    fn from(document: TaskDocument) -> Self {
        document_to_task(document)
    }
}
