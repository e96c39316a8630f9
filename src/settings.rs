//! Runtime settings loaded from `~/.config/corsair-rgb/settings.toml`
//!
//! ```toml
//! [detectors]
//! disabled = ["Corsair K55 RGB", "Corsair ST100 RGB"]
//! ```
//!
//! A missing file means defaults: every detector enabled.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings loading errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Per-detector switches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorSettings {
    /// Registration names to skip during detection
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub detectors: DetectorSettings,
}

impl Settings {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse from TOML string.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path`, or the default location when `None`
    ///
    /// Only an explicitly given path is required to exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let p = default_settings_path();
                if p.exists() {
                    Self::load(&p)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Whether the detector registered under `name` is switched off
    pub fn is_disabled(&self, name: &str) -> bool {
        self.detectors.disabled.iter().any(|d| d == name)
    }
}

/// Path to the default settings file.
pub fn default_settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

fn config_dir() -> PathBuf {
    if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(config).join("corsair-rgb")
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".config/corsair-rgb")
    } else {
        PathBuf::from("/tmp/corsair-rgb")
    }
}
