//! Configuration loading with file and environment variable support

use std::env;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::settings::Config;

/// Errors produced while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid value in environment variable {var}: {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for ridegraph_common::Error {
    fn from(err: ConfigError) -> Self {
        ridegraph_common::Error::config(err.to_string())
    }
}

/// Loads application configuration from files and the environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, trying `RIDEGRAPH_CONFIG_PATH`, then `config.yaml`
    /// and `config.yml` in the working directory, then built-in defaults.
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Config, ConfigError> {
        if let Ok(path) = env::var("RIDEGRAPH_CONFIG_PATH") {
            info!("Loading configuration from {}", path);
            return Self::load_config(&path);
        }

        for candidate in ["config.yaml", "config.yml"] {
            if Path::new(candidate).exists() {
                info!("Loading configuration from {}", candidate);
                return Self::load_config(candidate);
            }
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration from a specific file path
    pub fn load_from_file(path: &str) -> Result<Config, ConfigError> {
        if !Path::new(path).exists() {
            warn!("Configuration file {} does not exist", path);
        }
        Self::load_config(path)
    }

    fn load_config(path: &str) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        debug!("Configuration loaded and validated");
        Ok(config)
    }

    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(value) = env::var("RIDEGRAPH_DAY_CSV") {
            config.data.day_csv = value;
        }
        if let Ok(value) = env::var("RIDEGRAPH_HOUR_CSV") {
            config.data.hour_csv = value;
        }
        if let Ok(value) = env::var("RIDEGRAPH_OUTPUT_DIR") {
            config.output.directory = value;
        }
        if let Ok(value) = env::var("RIDEGRAPH_LOG_LEVEL") {
            config.logging.level = value;
        }
        if let Ok(value) = env::var("RIDEGRAPH_GRAPH_WIDTH") {
            config.graphs.width = value.parse().map_err(|e| ConfigError::EnvParseError {
                var: "RIDEGRAPH_GRAPH_WIDTH".to_string(),
                source: Box::new(e),
            })?;
        }
        if let Ok(value) = env::var("RIDEGRAPH_GRAPH_HEIGHT") {
            config.graphs.height = value.parse().map_err(|e| ConfigError::EnvParseError {
                var: "RIDEGRAPH_GRAPH_HEIGHT".to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}
