//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub tasks: TaskConfig,
    /// Default tracing directive when `RUST_LOG` is unset
    pub log_level: String,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which gateway backs the task collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Surreal,
}

/// Document store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Remote endpoint, e.g. `ws://localhost:8000`; `mem://` runs embedded
    pub uri: Option<String>,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    /// Table/collection holding task documents
    pub collection: String,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Reject statuses outside the recognized vocabulary
    pub strict_status: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            tasks: TaskConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            uri: None,
            username: "root".to_string(),
            password: "root".to_string(),
            namespace: "tasksvc".to_string(),
            database: "tasksvc".to_string(),
            collection: "tasks".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// `host:port` listen address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl AppConfig {
    /// Reject settings the service cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "Server port must be greater than 0".to_string(),
            ));
        }
        if self.storage.collection.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Storage collection name must not be empty".to_string(),
            ));
        }
        if self.storage.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Storage connect timeout must be greater than 0".to_string(),
            ));
        }
        let missing_uri = self
            .storage
            .uri
            .as_deref()
            .map_or(true, |uri| uri.trim().is_empty());
        if self.storage.backend == StorageBackend::Surreal && missing_uri {
            return Err(ConfigError::Validation(
                "Storage URI is required for the surreal backend".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.address(), "0.0.0.0:8080");
        assert_eq!(config.storage.connect_timeout(), Duration::from_secs(10));
        assert!(!config.tasks.strict_status);
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_blank_collection_rejected() {
        let mut config = AppConfig::default();
        config.storage.collection = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_surreal_requires_uri() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Surreal;
        assert!(config.validate().is_err());

        config.storage.uri = Some("ws://localhost:8000".into());
        assert!(config.validate().is_ok());
    }
}
