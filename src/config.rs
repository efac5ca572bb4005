//! Configuration loading
//!
//! Reads `<config dir>/smartaihub/config.toml`. Every field has a default, so
//! a missing file is not an error.

use std::path::{Path, PathBuf};

use crate::error::HubError;

mod types;

pub use types::{ApiConfig, Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, SuggestConfig};

/// Outcome of loading the default config file
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

/// Location of the user's config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("smartaihub").join("config.toml"))
}

/// Load the default config file, falling back to defaults on any problem
pub fn load_config() -> ConfigResult {
    match default_config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Lenient load: a missing file yields defaults silently, a broken one
/// yields defaults plus a warning
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("{}; using defaults", e)),
        },
    }
}

/// Strict load for a file the user named explicitly
pub fn read_config(path: &Path) -> Result<Config, HubError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| HubError::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
