//! Persisted settings stored as TOML in the app root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_AVATAR_SIZE: f32 = 60.0;
const DEFAULT_AMOUNT_MAX_LEN: usize = 7;
const MAX_AMOUNT_MAX_LEN: usize = 12;

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        /// Directory path that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to write a config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML serialization error.
        source: toml::ser::Error,
    },
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub interaction: InteractionSettings,
}

/// Drag and keypad tuning.
///
/// Config keys: `avatar_size`, `amount_max_len`, `scroll_lock_while_dragging`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSettings {
    /// Side length of the square drag avatar, in points.
    #[serde(default = "default_avatar_size")]
    pub avatar_size: f32,
    /// Maximum number of characters accepted by the amount keypad.
    #[serde(default = "default_amount_max_len")]
    pub amount_max_len: usize,
    /// Withdraw carousel scrolling while a contact is being dragged.
    #[serde(default = "default_true")]
    pub scroll_lock_while_dragging: bool,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            avatar_size: DEFAULT_AVATAR_SIZE,
            amount_max_len: DEFAULT_AMOUNT_MAX_LEN,
            scroll_lock_while_dragging: true,
        }
    }
}

impl InteractionSettings {
    /// Offset from the pointer to the avatar's top-left corner.
    pub fn avatar_half_extent(&self) -> f32 {
        self.avatar_size * 0.5
    }

    fn normalized(mut self) -> Self {
        if !self.avatar_size.is_finite() || self.avatar_size <= 0.0 {
            self.avatar_size = DEFAULT_AVATAR_SIZE;
        }
        self.amount_max_len = self.amount_max_len.clamp(1, MAX_AMOUNT_MAX_LEN);
        self
    }
}

impl AppSettings {
    pub fn normalized(self) -> Self {
        Self {
            interaction: self.interaction.normalized(),
        }
    }
}

fn default_avatar_size() -> f32 {
    DEFAULT_AVATAR_SIZE
}

fn default_amount_max_len() -> usize {
    DEFAULT_AMOUNT_MAX_LEN
}

fn default_true() -> bool {
    true
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load settings from the app root, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    load_settings_from(&config_path()?)
}

/// Persist settings to the app root, overwriting any previous contents.
pub fn save(settings: &AppSettings) -> Result<(), ConfigError> {
    save_to_path(settings, &config_path()?)
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings from `path`; a missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
        .map(AppSettings::normalized)
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
