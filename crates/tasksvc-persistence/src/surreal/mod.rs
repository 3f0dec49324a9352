//! SurrealDB Gateway Implementation
//!
//! Production document-store backend using SurrealDB.
//!
//! ## Modes
//!
//! - **Embedded (Memory)**: In-memory, no persistence (testing/development)
//! - **Client (WebSocket)**: Remote server connection (production)

pub mod connection;
pub mod task_gateway;

pub use connection::{ConnectionError, ConnectionMode, SharedConnection, SurrealConnection};
pub use task_gateway::SurrealTaskGateway;
