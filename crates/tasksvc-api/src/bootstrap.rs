//! Wiring of configuration into gateway, service and application state

use std::sync::Arc;

use tasksvc_application::DefaultTaskService;
use tasksvc_config::{AppConfig, StorageBackend, StorageConfig};
use tasksvc_domain::StatusPolicy;
use tasksvc_persistence::{InMemoryTaskGateway, TaskGateway};
use thiserror::Error;
use tracing::info;

use crate::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Storage backend '{0}' is not compiled into this binary")]
    BackendUnavailable(&'static str),

    #[cfg(feature = "surrealdb-backend")]
    #[error(transparent)]
    Connection(#[from] tasksvc_persistence::ConnectionError),
}

/// Open the configured task store
pub async fn build_gateway(config: &StorageConfig) -> Result<Arc<dyn TaskGateway>, BootstrapError> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory task storage");
            Ok(Arc::new(InMemoryTaskGateway::new()))
        }
        StorageBackend::Surreal => surreal_gateway(config).await,
    }
}

#[cfg(feature = "surrealdb-backend")]
async fn surreal_gateway(config: &StorageConfig) -> Result<Arc<dyn TaskGateway>, BootstrapError> {
    use tasksvc_persistence::{ConnectionMode, SurrealConnection, SurrealTaskGateway};

    let mode = match config.uri.as_deref() {
        None | Some("mem://") => ConnectionMode::Memory,
        Some(url) => ConnectionMode::Remote {
            url: url.to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        },
    };

    let connection = SurrealConnection::connect(
        mode,
        &config.namespace,
        &config.database,
        config.connect_timeout(),
    )
    .await?;

    info!(collection = %config.collection, "Using SurrealDB task storage");
    Ok(Arc::new(SurrealTaskGateway::new(
        Arc::new(connection),
        config.collection.clone(),
    )))
}

#[cfg(not(feature = "surrealdb-backend"))]
async fn surreal_gateway(_config: &StorageConfig) -> Result<Arc<dyn TaskGateway>, BootstrapError> {
    Err(BootstrapError::BackendUnavailable("surreal"))
}

/// Status policy selected by configuration
pub fn status_policy(config: &AppConfig) -> StatusPolicy {
    if config.tasks.strict_status {
        StatusPolicy::Strict
    } else {
        StatusPolicy::Lenient
    }
}

/// Build the state handed to the router
pub async fn build_state(config: &AppConfig) -> Result<AppState, BootstrapError> {
    let gateway = build_gateway(&config.storage).await?;
    let service = DefaultTaskService::new(gateway);
    Ok(AppState::new(Arc::new(service), status_policy(config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_builds() {
        let state = build_state(&AppConfig::default()).await.unwrap();
        assert_eq!(state.status_policy, StatusPolicy::Lenient);
    }

    #[test]
    fn test_strict_status_switch() {
        let mut config = AppConfig::default();
        config.tasks.strict_status = true;
        assert_eq!(status_policy(&config), StatusPolicy::Strict);
    }

    #[cfg(not(feature = "surrealdb-backend"))]
    #[tokio::test]
    async fn test_surreal_without_feature_fails() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Surreal;
        config.storage.uri = Some("ws://localhost:8000".into());
        assert!(matches!(
            build_gateway(&config.storage).await,
            Err(BootstrapError::BackendUnavailable("surreal"))
        ));
    }

    #[cfg(feature = "surrealdb-backend")]
    #[tokio::test]
    async fn test_surreal_memory_backend_builds() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Surreal;
        config.storage.uri = Some("mem://".into());
        assert!(build_gateway(&config.storage).await.is_ok());
    }
}
