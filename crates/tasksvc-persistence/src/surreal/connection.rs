//! SurrealDB Connection Management
//!
//! ## Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use tasksvc_persistence::surreal::{ConnectionMode, SurrealConnection};
//!
//! // Embedded in-memory (testing)
//! let conn = SurrealConnection::connect(ConnectionMode::Memory, "tasksvc", "main", Duration::from_secs(10)).await?;
//!
//! // Remote server (production)
//! let conn = SurrealConnection::connect(
//!     ConnectionMode::Remote {
//!         url: "ws://localhost:8000".into(),
//!         username: "root".into(),
//!         password: "secret".into(),
//!     },
//!     "tasksvc",
//!     "main",
//!     Duration::from_secs(10),
//! )
//! .await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use surrealdb::engine::any::{connect, Any};
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;
use thiserror::Error;
use tracing::{debug, info};

/// Connection mode for SurrealDB
#[derive(Debug, Clone, Default)]
pub enum ConnectionMode {
    /// In-memory database (no persistence, for testing/development)
    #[default]
    Memory,
    /// Remote server connection via WebSocket (production)
    Remote {
        url: String,
        username: String,
        password: String,
    },
}

impl ConnectionMode {
    fn endpoint(&self) -> String {
        match self {
            ConnectionMode::Memory => "mem://".to_string(),
            ConnectionMode::Remote { url, .. } => url.clone(),
        }
    }
}

/// SurrealDB connection errors
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Failed to connect to SurrealDB: {0}")]
    Connection(String),
    #[error("Timed out after {0:?} connecting to SurrealDB")]
    Timeout(Duration),
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Database selection failed: {0}")]
    DatabaseSelection(String),
    #[error("Health check failed: {0}")]
    HealthCheck(String),
}

/// SurrealDB connection wrapper
///
/// The client is safe for concurrent use; repositories share it through
/// [`SharedConnection`] without any extra locking.
pub struct SurrealConnection {
    client: Surreal<Any>,
    mode: ConnectionMode,
    namespace: String,
    database: String,
}

impl SurrealConnection {
    /// Connect, authenticate (remote only), select namespace/database and
    /// run a health check. The whole bootstrap is bounded by `timeout`.
    pub async fn connect(
        mode: ConnectionMode,
        namespace: &str,
        database: &str,
        timeout: Duration,
    ) -> Result<Self, ConnectionError> {
        tokio::time::timeout(timeout, Self::establish(mode, namespace, database))
            .await
            .map_err(|_| ConnectionError::Timeout(timeout))?
    }

    async fn establish(
        mode: ConnectionMode,
        namespace: &str,
        database: &str,
    ) -> Result<Self, ConnectionError> {
        let endpoint = mode.endpoint();
        match &mode {
            ConnectionMode::Memory => info!("Connecting to SurrealDB in-memory mode"),
            ConnectionMode::Remote { url, .. } => info!("Connecting to SurrealDB remote at {}", url),
        }

        let client = connect(endpoint)
            .await
            .map_err(|e| ConnectionError::Connection(e.to_string()))?;

        if let ConnectionMode::Remote {
            username, password, ..
        } = &mode
        {
            client
                .signin(Root {
                    username: username.as_str(),
                    password: password.as_str(),
                })
                .await
                .map_err(|e| ConnectionError::Authentication(e.to_string()))?;
        }

        client
            .use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| ConnectionError::DatabaseSelection(e.to_string()))?;

        client
            .health()
            .await
            .map_err(|e| ConnectionError::HealthCheck(e.to_string()))?;

        debug!("Connected to SurrealDB namespace={} database={}", namespace, database);

        Ok(Self {
            client,
            mode,
            namespace: namespace.to_string(),
            database: database.to_string(),
        })
    }

    /// Get the connection mode
    pub fn mode(&self) -> &ConnectionMode {
        &self.mode
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Get the underlying database client
    pub fn client(&self) -> &Surreal<Any> {
        &self.client
    }

    /// Check if connected in embedded mode
    pub fn is_embedded(&self) -> bool {
        matches!(self.mode, ConnectionMode::Memory)
    }
}

/// Connection shared by every gateway built on it
pub type SharedConnection = Arc<SurrealConnection>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_connection() {
        let conn = SurrealConnection::connect(
            ConnectionMode::Memory,
            "tasksvc",
            "main",
            Duration::from_secs(10),
        )
        .await
        .unwrap();
        assert!(conn.is_embedded());
        assert_eq!(conn.namespace(), "tasksvc");
        assert_eq!(conn.database(), "main");
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(ConnectionMode::Memory.endpoint(), "mem://");
        let remote = ConnectionMode::Remote {
            url: "ws://db:8000".into(),
            username: "root".into(),
            password: "root".into(),
        };
        assert_eq!(remote.endpoint(), "ws://db:8000");
    }
}
