//! Configuration types for modeswitch.
//!
//! This module defines the configuration schema: initial mode, the width at
//! which the selector switches to its compact layout, theme choice and
//! keybinding overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::keybinds::Keybinds;
use crate::mode::UiMode;

/// Directory (relative to the working directory) holding the config file.
pub const CONFIG_DIR: &str = ".modeswitch";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// Main configuration for modeswitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Mode the host application starts in.
    #[serde(default)]
    pub default_mode: UiMode,

    /// Container widths (in columns) strictly below this use the compact selector.
    #[serde(default = "default_compact_below")]
    pub compact_below: u16,

    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Force ASCII borders and markers.
    #[serde(default)]
    pub ascii: bool,

    /// Keybinding overrides.
    #[serde(default)]
    pub keybinds: Keybinds,
}

fn default_compact_below() -> u16 {
    30
}

/// Built-in color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark theme.
    #[default]
    Mocha,
    /// Light theme.
    Latte,
    /// High contrast theme for accessibility.
    HighContrast,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: UiMode::default(),
            compact_below: default_compact_below(),
            theme: ThemeName::default(),
            ascii: false,
            keybinds: Keybinds::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Default config path under `root`.
    pub fn default_path(root: &Path) -> std::path::PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
