//! Menu bar configuration.
//!
//! Configuration is a small JSON document:
//!
//! ```json
//! { "tabs": ["Home", "Feed"], "indicator_height": 2, "indicator_color": "black" }
//! ```
//!
//! Every field is optional. The file is looked up at `$MENUBAR_CONFIG`, or
//! `menubar-tui/config.json` under the platform config directory.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::menu_bar::PLACEHOLDER_TAB;
use crate::models::{IndicatorStyle, DEFAULT_INDICATOR_HEIGHT};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "MENUBAR_CONFIG";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for this schema.
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown indicator color '{0}'")]
    InvalidColor(String),

    #[error("Indicator height must be positive")]
    InvalidIndicatorHeight,
}

/// On-disk representation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    pub tabs: Option<Vec<String>>,
    pub indicator_height: Option<u16>,
    pub indicator_color: Option<String>,
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBarConfig {
    pub tabs: Vec<String>,
    pub style: IndicatorStyle,
}

impl Default for MenuBarConfig {
    fn default() -> Self {
        Self {
            tabs: vec![PLACEHOLDER_TAB.to_string()],
            style: IndicatorStyle::default(),
        }
    }
}

impl TryFrom<RawConfig> for MenuBarConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let defaults = Self::default();

        let height = raw.indicator_height.unwrap_or(DEFAULT_INDICATOR_HEIGHT);
        if height == 0 {
            return Err(ConfigError::InvalidIndicatorHeight);
        }

        let color = match raw.indicator_color {
            Some(name) => {
                Color::from_str(name.trim()).map_err(|_| ConfigError::InvalidColor(name))?
            }
            None => defaults.style.color,
        };

        Ok(Self {
            tabs: raw.tabs.unwrap_or(defaults.tabs),
            style: IndicatorStyle { height, color },
        })
    }
}

impl MenuBarConfig {
    /// Parse a JSON document. `origin` is only used in error messages.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        raw.try_into()
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                info!("Loading menu bar config from {}", path.display());
                Self::from_json(&json, path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load from [`default_config_path`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path())
    }
}

/// Resolve the config file location.
///
/// Order:
/// 1. `$MENUBAR_CONFIG`
/// 2. `<config dir>/menubar-tui/config.json` (XDG on Linux, Library on macOS)
/// 3. `./menubar-tui.json`
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("menubar-tui").join("config.json");
    }

    PathBuf::from("menubar-tui.json")
}
