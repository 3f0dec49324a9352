//! TaskSvc domain layer
//!
//! The task entity, the client-editable draft of a task and the field rules
//! every create/update must satisfy before it reaches the service layer.

pub mod errors;
pub mod task;

pub use errors::{ValidationError, ValidationResult};
pub use task::{is_blank, StatusPolicy, Task, TaskDraft, TaskStatus};
