//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Signup store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("sorta").to_string_lossy().to_string())
        .unwrap_or_else(|| "./sorta_data".to_string())
}

fn default_export_dir() -> String {
    dirs::download_dir()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "./exports".to_string())
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            export_dir: default_export_dir(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Upstream form backend configuration
///
/// The project identifier is a secret and never belongs in the config
/// file; it arrives only through the `FORMSPREE_ID` environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_upstream_url")]
    pub base_url: String,

    #[serde(default)]
    pub form_id: Option<String>,

    #[serde(default = "default_upstream_timeout")]
    pub request_timeout_ms: u64,
}

fn default_upstream_url() -> String {
    "https://formspree.io".to_string()
}

fn default_upstream_timeout() -> u64 {
    10_000
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            form_id: None,
            request_timeout_ms: default_upstream_timeout(),
        }
    }
}

/// Particle animation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,

    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_frame_interval() -> u64 {
    16
}

fn default_width() -> f32 {
    1200.0
}

fn default_height() -> f32 {
    800.0
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
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
            file: None,
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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
        // Try default config locations
        let config_paths = [
            dirs::config_dir().map(|p| p.join("sorta").join("config.toml")),
            Some(PathBuf::from("/etc/sorta/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        // Fall back to environment-only config
        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Store overrides
        if let Ok(data_dir) = std::env::var("SORTA_DATA_DIR") {
            self.store.data_dir = data_dir;
        }
        if let Ok(export_dir) = std::env::var("SORTA_EXPORT_DIR") {
            self.store.export_dir = export_dir;
        }

        // API overrides
        if let Ok(host) = std::env::var("SORTA_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("SORTA_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Upstream overrides
        if let Ok(url) = std::env::var("SORTA_UPSTREAM_URL") {
            self.upstream.base_url = url;
        }
        if let Ok(form_id) = std::env::var("FORMSPREE_ID") {
            if !form_id.is_empty() {
                self.upstream.form_id = Some(form_id);
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("SORTA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SORTA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            api: ApiConfig::default(),
            upstream: UpstreamConfig::default(),
            animation: AnimationConfig::default(),
            logging: LoggingConfig::default(),
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
    r#"# Sorta Configuration
#
# Environment variables override these settings:
# - SORTA_DATA_DIR
# - SORTA_EXPORT_DIR
# - SORTA_HOST
# - SORTA_PORT
# - SORTA_UPSTREAM_URL
# - SORTA_LOG_LEVEL
# - SORTA_LOG_FORMAT
#
# The upstream form id is a secret. It is read only from the FORMSPREE_ID
# environment variable and should never be written into this file.

[store]
# Directory for the signup store file
data_dir = "~/.local/share/sorta"

# Directory CSV exports are written to
export_dir = "~/Downloads"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8080

[upstream]
# Form backend base URL
base_url = "https://formspree.io"

# Request timeout in milliseconds
request_timeout_ms = 10000

[animation]
# Frame interval in milliseconds (16 is roughly 60 fps)
frame_interval_ms = 16

# Headless viewport size used by the demo
width = 1200.0
height = 800.0

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/sorta/sorta.log"
"#
    .to_string()
}
