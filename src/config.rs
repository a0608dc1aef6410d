//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. With no
//! file and no environment the dashboard fetches from the public API,
//! sorts by country name descending and starts with an empty search.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_BASE_URL;
use crate::listing::{SortOrder, SortState};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Statistics API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Unset means no timeout
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("covid-dashboard/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: None,
        }
    }
}

/// Presentation defaults
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_order_by")]
    pub default_order_by: String,

    #[serde(default)]
    pub default_order: SortOrder,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_order_by() -> String {
    "country".to_string()
}

fn default_placeholder() -> String {
    "N/A".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_order_by: default_order_by(),
            default_order: SortOrder::Desc,
            placeholder: default_placeholder(),
        }
    }
}

impl DisplayConfig {
    /// Initial sort state of a freshly opened listing
    pub fn initial_sort(&self) -> SortState {
        SortState::new(self.default_order_by.clone(), self.default_order)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Candidate config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("covid-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // API overrides
        if let Ok(url) = std::env::var("COVID_DASHBOARD_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("COVID_DASHBOARD_REQUEST_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = Some(secs);
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("COVID_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("COVID_DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Covid Dashboard Configuration
#
# Environment variables override these settings:
# - COVID_DASHBOARD_API_URL
# - COVID_DASHBOARD_REQUEST_TIMEOUT
# - COVID_DASHBOARD_LOG_LEVEL
# - COVID_DASHBOARD_LOG_FORMAT

[api]
# Statistics API base URL
base_url = "https://corona.lmao.ninja/v2"

# User-Agent header
user_agent = "covid-dashboard"

# Request timeout in seconds (unset = wait indefinitely)
# request_timeout_secs = 30

[display]
# Initial sort column (any field name of the country snapshot)
default_order_by = "country"

# Initial sort direction: asc or desc
default_order = "desc"

# Shown in place of missing values
placeholder = "N/A"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
