//! Configuration file handling.
//!
//! Settings are read from `$XDG_CONFIG_HOME/keycalc/config.toml`. A missing
//! file yields defaults; command-line flags are applied on top by the caller.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calculator::AngleMode;
use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start with the scientific panel shown.
    pub scientific: bool,
    /// Angle mode for trigonometric keys at startup.
    pub angle_mode: AngleMode,
    /// Copy every successful `=` result to the clipboard.
    pub copy_on_equals: bool,
}

impl Config {
    /// Default location of the config file, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Load the config from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}
