//! Settings file support.
//!
//! Settings live in a JSON file with camelCase keys. Every field has a
//! default, so a missing file or a partial file is fine. The file is only
//! ever read.
//!
//! Path resolution order:
//! 1. an explicit path (the `--config` flag)
//! 2. the `WORDKIT_SETTINGS` environment variable
//! 3. `<config dir>/wordkit/settings.json`

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::debounce::DEFAULT_DEBOUNCE_DELAY_MS;
use crate::sequence::LabelStyle;

/// Environment variable naming an alternate settings file
pub const SETTINGS_ENV_VAR: &str = "WORDKIT_SETTINGS";

/// Settings file name inside the config directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Error types for settings operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// File exists but could not be read
    #[error("Failed to read settings from {path:?}: {message}")]
    Read { path: PathBuf, message: String },
    /// File is not valid settings JSON
    #[error("Failed to parse settings from {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    /// `logLevel` is not a recognized level name
    #[error("Invalid log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Quiet period for the debounce command, in milliseconds
    pub debounce_delay_ms: u64,
    /// Label style used by the fizzbuzz command when none is given
    pub fizzbuzz_style: LabelStyle,
    /// Log level name (e.g. "info"); the build default applies when unset
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            fizzbuzz_style: LabelStyle::default(),
            log_level: None,
        }
    }
}

impl Settings {
    /// Resolve the settings path and load it, falling back to defaults
    /// when no path can be determined or the file does not exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match resolve_settings_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => {
                crate::debug!("No config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            crate::debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let settings: Settings =
            serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        settings.validate()?;
        crate::debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if let Some(level) = &self.log_level {
            LevelFilter::from_str(level)
                .map_err(|_| SettingsError::InvalidLogLevel(level.clone()))?;
        }
        Ok(())
    }

    /// Parsed `logLevel`, if set
    pub fn log_level_filter(&self) -> Option<LevelFilter> {
        self.log_level
            .as_deref()
            .and_then(|level| LevelFilter::from_str(level).ok())
    }
}

/// Default settings path: `<config dir>/wordkit/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordkit").join(DEFAULT_SETTINGS_FILE))
}

/// Pick the settings path: explicit, then environment, then default
pub fn resolve_settings_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    match std::env::var_os(SETTINGS_ENV_VAR) {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => default_settings_path(),
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
