// File: src/config.rs
// Purpose: Configuration parsing from plume.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Application metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Path resolved on initial load (default: "/")
    #[serde(default = "default_start_path")]
    pub start_path: String,

    /// Whether static segments match case-insensitively (default: false)
    #[serde(default = "default_false")]
    pub case_insensitive: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default tracing filter, overridable via RUST_LOG (default: "info")
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

// Default values
fn default_name() -> String {
    "plume".to_string()
}

fn default_start_path() -> String {
    "/".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            start_path: default_start_path(),
            case_insensitive: default_false(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Loads `plume.toml` from the working directory
    pub fn load_default() -> Result<Config> {
        Self::load("plume.toml")
    }
}
