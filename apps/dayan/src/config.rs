//! # App Configuration
//!
//! Optional `dayan.toml` configuration file. Every setting has a working
//! default, and CLI flags override the file.

use std::path::{Path, PathBuf};

use dayan_core::DayanError;
use serde::Deserialize;

/// Default configuration file, read from the working directory if present.
pub const DEFAULT_CONFIG_FILE: &str = "dayan.toml";

/// Default history file, next to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "dayan_history.json";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the JSON history file.
    pub history: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicitly given path must exist and parse; the default path is
    /// optional and silently skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, DayanError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            DayanError::Io(format!("cannot read config '{}': {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            DayanError::Serialization(format!("invalid config '{}': {}", path.display(), e))
        })
    }

    /// Resolve the history file path, preferring the CLI override.
    #[must_use]
    pub fn history_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.history.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE))
    }
}

// =============================================================================
// TESTS
// =============================================================================
