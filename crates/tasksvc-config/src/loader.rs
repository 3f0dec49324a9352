//! Layered configuration loading

use std::path::PathBuf;

use config::{Config, Environment, File};
use tracing::debug;

use crate::error::Result;
use crate::types::AppConfig;

/// Default configuration file, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tasksvc.toml";

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "TASKSVC";

/// Configuration loader
pub struct ConfigLoader {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
    /// Read `.env` into the process environment before loading
    load_dotenv: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            load_dotenv: true,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn without_dotenv(mut self) -> Self {
        self.load_dotenv = false;
        self
    }

    /// Build and validate the configuration
    pub fn load(&self) -> Result<AppConfig> {
        if self.load_dotenv {
            if let Ok(path) = dotenv::dotenv() {
                debug!("Loaded environment from {}", path.display());
            }
        }

        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;

        debug!(
            "Configuration loaded: backend={:?} address={}",
            app_config.storage.backend,
            app_config.server.address()
        );
        Ok(app_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::types::StorageBackend;
    use std::io::Write;

    fn loader(prefix: &str, path: PathBuf) -> ConfigLoader {
        ConfigLoader::new()
            .with_path(path)
            .with_env_prefix(prefix)
            .without_dotenv()
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = loader("TASKSVC_T_DEFAULTS", dir.path().join("absent.toml"))
            .load()
            .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "log_level = \"debug\"\n\n[server]\nport = 9090\n\n[tasks]\nstrict_status = true"
        )
        .unwrap();

        let config = loader("TASKSVC_T_FILE", file.path().to_path_buf())
            .load()
            .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.tasks.strict_status);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 9090").unwrap();

        std::env::set_var("TASKSVC_T_ENV_SERVER__PORT", "7070");
        std::env::set_var("TASKSVC_T_ENV_STORAGE__BACKEND", "surreal");
        std::env::set_var("TASKSVC_T_ENV_STORAGE__URI", "ws://db:8000");

        let config = loader("TASKSVC_T_ENV", file.path().to_path_buf())
            .load()
            .unwrap();
        assert_eq!(config.server.port, 7070);
        assert_eq!(config.storage.backend, StorageBackend::Surreal);
        assert_eq!(config.storage.uri.as_deref(), Some("ws://db:8000"));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[storage]\nbackend = \"surreal\"").unwrap();

        let err = loader("TASKSVC_T_INVALID", file.path().to_path_buf())
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_serialized_defaults_roundtrip_through_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", toml::to_string(&AppConfig::default()).unwrap()).unwrap();

        let config = loader("TASKSVC_T_ROUNDTRIP", file.path().to_path_buf())
            .load()
            .unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
