//! Configuration management for the crop advisor tools
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with CROP_ADVISOR_ prefix

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "CROP_ADVISOR";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Log output configuration
    pub logging: LoggingConfig,

    /// JSON output configuration
    pub output: OutputConfig,

    /// Product catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default tracing filter; RUST_LOG takes precedence
    pub filter: String,

    /// Emit logs as JSON lines
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// Pretty-print the JSON document on stdout
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON file replacing the built-in product catalog
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var(format!("{}_ENVIRONMENT", ENV_PREFIX)).unwrap_or_else(|_| "development".into());

        Self::builder(&environment, Path::new("config"))?
            // Override with environment variables (CROP_ADVISOR_ prefix)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load defaults plus `<config_dir>/<environment>.*`, without environment overrides
    pub fn load_from(environment: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        Self::builder(environment, config_dir)?.build()?.try_deserialize()
    }

    fn builder(environment: &str, config_dir: &Path) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let file = config_dir.join(environment);

        Ok(config::Config::builder()
            // Start with default values
            .set_default("environment", environment)?
            .set_default("logging.filter", "warn")?
            .set_default("logging.json", false)?
            .set_default("output.pretty", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&file.to_string_lossy()).required(false)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            logging: LoggingConfig::default(),
            output: OutputConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
        }
    }
}
