//! Configuration management for TaskSvc
//!
//! Settings are layered: built-in defaults, then an optional `tasksvc.toml`,
//! then `.env`, then `TASKSVC_*` environment variables (nested keys use `__`,
//! e.g. `TASKSVC_SERVER__PORT=8080`). The result is loaded once at startup
//! and handed to the components that need it.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{ConfigError, Result};
pub use loader::ConfigLoader;
pub use types::{AppConfig, ServerConfig, StorageBackend, StorageConfig, TaskConfig};
