//! Configuration module for Kilo Search.
//!
//! This module provides a configuration system that can load settings
//! from files (TOML, YAML, JSON) and override them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::config::ConfigError;

pub mod search;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "KILO";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Kilo Search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct KiloConfig {
    /// Search configuration
    pub search: search::SearchConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl Validate for KiloConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.search.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: true,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for Kilo Search.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file, and environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(KiloConfig)` if the configuration was loaded successfully
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<KiloConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&KiloConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                Some("yaml" | "yml") => FileFormat::Yaml,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        let kilo_config: KiloConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        kilo_config.validate()?;

        tracing::debug!(
            path = ?self.config_path,
            prefix = %self.env_prefix,
            "Configuration loaded"
        );

        Ok(kilo_config)
    }
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<KiloConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    pub fn new(config: KiloConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &KiloConfig {
        &self.config
    }
}

static GLOBAL_CONFIG: OnceCell<GlobalConfig> = OnceCell::new();

/// Initialize the global configuration.
///
/// Later calls are ignored with a warning.
pub fn init_global_config(config: KiloConfig) {
    if GLOBAL_CONFIG.set(GlobalConfig::new(config)).is_err() {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration, falling back to defaults if it was never
/// initialized.
pub fn get_global_config() -> GlobalConfig {
    GLOBAL_CONFIG
        .get_or_init(|| GlobalConfig::new(KiloConfig::default()))
        .clone()
}
