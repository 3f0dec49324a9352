//! TaskSvc Persistence Layer
//!
//! Storage records for tasks, the mapping between records and the domain
//! [`Task`](tasksvc_domain::Task), and the gateways that run find/insert/
//! update/delete against a task collection.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                   TaskGateway (gateway.rs)                     │
//! ├───────────────────────────────────────────────────────────────┤
//! │  memory/                      │  surreal/                      │
//! │  InMemoryTaskGateway          │  SurrealTaskGateway            │
//! └───────────────────────────────────────────────────────────────┘
//!          ▲ TaskDocument / TaskChanges (record.rs)
//!          │ ObjectId (object_id.rs), conversions (mapper.rs)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use tasksvc_persistence::{InMemoryTaskGateway, TaskGateway};
//!
//! let gateway: Arc<dyn TaskGateway> = Arc::new(InMemoryTaskGateway::new());
//! ```
//!
//! With the `surrealdb-backend` feature:
//!
//! ```ignore
//! use tasksvc_persistence::surreal::{ConnectionMode, SurrealConnection, SurrealTaskGateway};
//!
//! let conn = SurrealConnection::connect(ConnectionMode::Memory, "tasksvc", "main", timeout).await?;
//! let gateway = SurrealTaskGateway::new(Arc::new(conn), "tasks");
//! ```

pub mod error;
pub mod gateway;
pub mod mapper;
pub mod memory;
pub mod object_id;
pub mod record;

// SurrealDB backend for production persistence
#[cfg(feature = "surrealdb-backend")]
pub mod surreal;

pub use error::{PersistenceError, PersistenceResult};
pub use gateway::TaskGateway;
pub use memory::InMemoryTaskGateway;
pub use object_id::{ObjectId, ObjectIdError};
pub use record::{TaskChanges, TaskDocument};

#[cfg(feature = "surrealdb-backend")]
pub use surreal::{
    ConnectionError, ConnectionMode, SharedConnection, SurrealConnection, SurrealTaskGateway,
};
