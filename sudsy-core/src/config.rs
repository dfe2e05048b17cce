//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/sudsy/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/sudsy/` (~/.config/sudsy/)
//! - Data: `$XDG_DATA_HOME/sudsy/` (~/.local/share/sudsy/)
//! - State/Logs: `$XDG_STATE_HOME/sudsy/` (~/.local/state/sudsy/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// Where thoughts come from
    #[serde(default)]
    pub content: ContentConfig,

    /// Floating emoji settings for the TUI
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// External thought list configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// `http(s)://` URL or filesystem path of a JSON array of thoughts.
    /// When unset the embedded list is used.
    pub source: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_content_timeout")]
    pub timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: None,
            timeout_secs: default_content_timeout(),
        }
    }
}

fn default_content_timeout() -> u64 {
    5
}

/// Decorative animation configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AnimationConfig {
    /// Enable/disable floating emoji
    #[serde(default = "default_animation_enabled")]
    pub enabled: bool,

    /// Milliseconds between periodic floater spawns
    #[serde(default = "default_floater_interval")]
    pub floater_interval_ms: u64,

    /// Upper bound on simultaneously visible floaters
    #[serde(default = "default_max_floaters")]
    pub max_floaters: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_animation_enabled(),
            floater_interval_ms: default_floater_interval(),
            max_floaters: default_max_floaters(),
        }
    }
}

impl AnimationConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.floater_interval_ms == 0 {
            return Err(Error::Config(
                "animation.floater_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.max_floaters == 0 {
            return Err(Error::Config(
                "animation.max_floaters must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_animation_enabled() -> bool {
    true
}

fn default_floater_interval() -> u64 {
    650
}

fn default_max_floaters() -> usize {
    40
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.animation.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/sudsy/config.toml` (~/.config/sudsy/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("sudsy").join("config.toml")
    }

    /// Returns the data directory path (for the saved-state store)
    ///
    /// `$XDG_DATA_HOME/sudsy/` (~/.local/share/sudsy/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("sudsy")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/sudsy/` (~/.local/state/sudsy/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("sudsy")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/sudsy/sudsy.log` (~/.local/state/sudsy/sudsy.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("sudsy.log")
    }
}
