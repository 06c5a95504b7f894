//! Configuration file loading for the terminal player.
//!
//! Settings live in `chess-play.toml` in the current directory unless a path
//! is given on the command line. Every field is optional.

use std::path::{Path, PathBuf};

use chess_search::SearchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlayConfig {
    /// Log filter used when `RUST_LOG` is not set.
    /// Defaults to "warn" so the game output stays readable.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Search parameters.
    #[serde(default)]
    pub search: SearchConfig,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            log_filter: default_log_filter(),
            search: SearchConfig::default(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from `path`, or from [`Self::config_path()`] when
    /// no path is given.
    ///
    /// A missing default file yields the default configuration; a missing
    /// explicit file is an error. Search settings are not validated here,
    /// since command-line flags may still override them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read and
    /// [`ConfigError::ParseError`] for invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default configuration file path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess-play.toml")
    }
}
