use serde::{Deserialize, Serialize};

use super::collector::CollectorConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::pipeline::PipelineConfig;

const LOCAL_CONFIG_PATH: &str = "bindlog-collector.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/bindlog-collector/config.toml";

pub const ENV_HOST: &str = "LUMU_HOST";
pub const ENV_COLLECTOR_ID: &str = "COLLECTOR_ID";
pub const ENV_CLIENT_KEY: &str = "LUMU_CLIENT_KEY";

/// Main configuration structure for the collector
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Remote endpoint and credentials
    #[serde(default)]
    pub collector: CollectorConfig,

    /// Batching of parsed queries
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. bindlog-collector.toml in current directory
    /// 3. /etc/bindlog-collector/config.toml
    /// 4. Default configuration
    ///
    /// Environment variables are applied on top of the file, CLI overrides last.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply endpoint settings from the environment; unset or empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(host) = lookup(ENV_HOST) {
            self.collector.host = host;
        }
        if let Some(id) = lookup(ENV_COLLECTOR_ID) {
            self.collector.collector_id = id;
        }
        if let Some(key) = lookup(ENV_CLIENT_KEY) {
            self.collector.client_key = key;
        }
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(host) = overrides.host {
            self.collector.host = host;
        }
        if let Some(id) = overrides.collector_id {
            self.collector.collector_id = id;
        }
        if let Some(key) = overrides.client_key {
            self.collector.client_key = key;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.collector.timeout_secs = timeout;
        }
        if let Some(size) = overrides.chunk_size {
            self.pipeline.chunk_size = size;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collector.host.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "collector.host is not set (config file or {})",
                ENV_HOST
            )));
        }

        if self.collector.collector_id.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "collector.collector_id is not set (config file or {})",
                ENV_COLLECTOR_ID
            )));
        }

        if self.collector.client_key.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "collector.client_key is not set (config file or {})",
                ENV_CLIENT_KEY
            )));
        }

        if self.collector.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "collector.timeout_secs must be greater than 0".to_string(),
            ));
        }

        self.pipeline.chunk_size()?;

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub collector_id: Option<String>,
    pub client_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub chunk_size: Option<usize>,
    pub log_level: Option<String>,
}
