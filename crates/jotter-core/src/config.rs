//! Editor configuration.
//!
//! Settings are read once at start-up from `<config dir>/jotter/config.toml`
//! and never written back. `#[serde(default)]` on every section means a
//! partial file only overrides what it names. The theme is deliberately not
//! a setting: every session starts light.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main editor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window chrome settings
    pub window: WindowConfig,

    /// Editing behavior
    pub editor: EditorConfig,

    /// File dialog settings
    pub files: FileConfig,

    /// Keyboard settings
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    ///
    /// A malformed file is logged and ignored rather than refusing to start.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            tracing::info!("Loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("jotter").join("config.toml"))
    }
}

/// Window chrome configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Shown after the document name in the title bar
    pub app_name: String,

    /// Initial width in logical pixels
    pub width: f32,

    /// Initial height in logical pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            app_name: "Jotter".to_string(),
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Editing behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in points
    pub font_size: f32,

    /// Undo history limit
    pub undo_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            undo_limit: 1000,
        }
    }
}

/// File dialog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Extension appended by Save As when the chosen name has none
    pub default_extension: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            default_extension: "txt".to_string(),
        }
    }
}

/// Keyboard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Extra bindings: key string ("ctrl+shift+s") to command name
    /// ("file.save_as"). These take precedence over the defaults.
    pub bindings: HashMap<String, String>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
