// SPDX-License-Identifier: MPL-2.0
//! Loading and saving notification settings from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[success]` - Auto-dismiss timing for success banners
//! - `[errors]` - Error intake policy (suppressed HTTP statuses)
//!
//! # Examples
//!
//! ```no_run
//! use notify_store::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.success.timeout_ms = Some(5000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when `settings.toml` exists but cannot be read.
pub const SETTINGS_LOAD_WARNING: &str = "notify-store-settings-unreadable";

// =============================================================================
// Section Structs
// =============================================================================

/// Success notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessConfig {
    /// Auto-dismiss delay in milliseconds.
    #[serde(
        default = "default_success_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_ms: Option<u64>,
}

impl Default for SuccessConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_success_timeout_ms(),
        }
    }
}

/// Error and warning intake settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorsConfig {
    /// HTTP response statuses for which `show_error` does nothing.
    #[serde(default = "default_suppressed_statuses")]
    pub suppressed_statuses: Vec<u16>,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            suppressed_statuses: default_suppressed_statuses(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub success: SuccessConfig,

    #[serde(default)]
    pub errors: ErrorsConfig,
}

impl Config {
    /// Resolved success auto-dismiss delay.
    #[must_use]
    pub fn success_timeout(&self) -> Duration {
        Duration::from_millis(
            self.success
                .timeout_ms
                .unwrap_or(DEFAULT_SUCCESS_TIMEOUT_MS),
        )
    }

    /// Whether errors carrying this HTTP status are dropped.
    #[must_use]
    pub fn is_suppressed(&self, status: u16) -> bool {
        self.errors.suppressed_statuses.contains(&status)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_success_timeout_ms() -> Option<u64> {
    Some(DEFAULT_SUCCESS_TIMEOUT_MS)
}

fn default_suppressed_statuses() -> Vec<u16> {
    DEFAULT_SUPPRESSED_STATUSES.to_vec()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If the file exists but
/// cannot be read, returns the default config with a warning key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default notification settings");
                    return (
                        Config::default(),
                        Some(SETTINGS_LOAD_WARNING.to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
