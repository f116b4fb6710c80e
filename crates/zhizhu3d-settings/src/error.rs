//! Settings errors.
//!
//! Reading, writing and validating `config.toml`/`config.json` all report
//! through [`SettingsError`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// Config file unreadable; carries the path and the OS message.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// Config file unwritable or not encodable as TOML.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// A value failed `Config::validate`. `key` is the dotted field path.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// Parent directory of the config file could not be created.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// Malformed `.json` config.
    #[error("Malformed JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed `.toml` config.
    #[error("Malformed TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SettingsError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        SettingsError::InvalidSetting {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Where the config lives or what it is stored as.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File extension other than `.json` or `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// `dirs` found no config directory on this system.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
