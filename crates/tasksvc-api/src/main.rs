//! TaskSvc API server binary

use anyhow::Context;
use tasksvc_api::{bootstrap, create_router, ApiServer};
use tasksvc_config::ConfigLoader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting TaskSvc API...");

    let state = bootstrap::build_state(&config)
        .await
        .context("Failed to initialize task storage")?;

    ApiServer::new(config.server.address(), create_router(state))
        .run()
        .await?;

    // router, service and storage connection are dropped here
    tracing::info!("Storage connection closed");
    Ok(())
}
