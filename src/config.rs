//! Application configuration.

use crate::consts::cli_consts::{CONFIG_DIR, CONFIG_FILE, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the wealth backend, e.g. `http://127.0.0.1:8000`.
    pub api_url: String,
}

impl Config {
    /// Create Config with the given API base URL.
    pub fn new(api_url: String) -> Self {
        Config { api_url }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        // Check that the path ends with config.json
        if !path.ends_with(CONFIG_FILE) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Path must end with {}", CONFIG_FILE),
            ));
        }
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path)
    }
}

/// Location of the config file: `$HOME/.wealth-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Checks that `url` is an absolute http(s) URL.
pub fn validate_api_url(url: &str) -> Result<(), String> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| format!("Invalid API URL: {}. It must start with http:// or https://", url))?;
    if rest.trim_matches('/').is_empty() {
        return Err(format!("Invalid API URL: {}. It has no host", url));
    }
    Ok(())
}

/// Picks the API base URL: command-line flag, then config file, then the default.
pub fn resolve_api_url(cli_override: Option<String>, config_path: &Path) -> String {
    if let Some(url) = cli_override {
        return url;
    }
    if config_path.exists() {
        if let Ok(config) = Config::load_from_file(config_path) {
            if !config.api_url.is_empty() {
                return config.api_url;
            }
        }
    }
    DEFAULT_API_URL.to_string()
}
