//! TaskSvc Application Layer
//!
//! Implements the task use cases by mapping validated drafts into storage
//! documents and delegating to a [`TaskGateway`](tasksvc_persistence::TaskGateway).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Application Layer                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Services            │ Context          │ Seams                  │
//! │  TaskService (trait) │ CorrelationId    │ Clock / SystemClock    │
//! │  DefaultTaskService  │                  │                        │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ depends on
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │          Persistence Layer (gateway, mapper, records)            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Non-Goals
//!
//! - Field validation (belongs in the domain layer, applied by handlers)
//! - HTTP handling (belongs in the API layer)

pub mod clock;
pub mod correlation;
pub mod errors;
pub mod services;

pub use clock::{Clock, FixedClock, SystemClock};
pub use correlation::CorrelationId;
pub use errors::{ApplicationError, ApplicationResult};
pub use services::*;
