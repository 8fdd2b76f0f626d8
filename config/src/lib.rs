//! # Configuration Management for FluxHaus
//!
//! This crate provides the configuration structures used by the FluxHaus
//! query coordinator.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::QueryConfig;
//!
//! let query_config = QueryConfig::new("telemetry".to_string())
//!     .with_strict_filters(true)
//!     .with_default_limit(100);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [query]
//! bucket = "telemetry"
//! strict_filters = true
//! default_limit = 100
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from fluxhaus.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./fluxhaus.toml";
const CONFIG_PATH_ENV: &str = "FLUXHAUS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub query: QueryConfig,
}

/// Query construction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Bucket used by the initial `from()` stage
    pub bucket: String,
    /// Reject malformed predicates instead of rendering them as given
    #[serde(default)]
    pub strict_filters: bool,
    /// Limit appended to filtered queries
    #[serde(default)]
    pub default_limit: Option<i64>,
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        match env::var(CONFIG_PATH_ENV) {
            Ok(config_path) => Self::from_file(&config_path),
            Err(env::VarError::NotPresent) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            Err(env::VarError::NotPresent) => Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH
            ))),
            // Set but not valid Unicode
            Err(err) => Err(err.into()),
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        self.query.validate()
    }
}

impl QueryConfig {
    /// Create a new query configuration with permissive filters and no limit
    pub fn new(bucket: String) -> Self {
        Self {
            bucket,
            strict_filters: false,
            default_limit: None,
        }
    }

    pub fn with_strict_filters(mut self, strict_filters: bool) -> Self {
        self.strict_filters = strict_filters;
        self
    }

    pub fn with_default_limit(mut self, default_limit: i64) -> Self {
        self.default_limit = Some(default_limit);
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket.is_empty() {
            return Err(ConfigError::Invalid(
                "Query bucket cannot be empty".to_string(),
            ));
        }
        if let Some(limit) = self.default_limit {
            if limit <= 0 {
                return Err(ConfigError::Invalid(
                    "Query default_limit must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}
