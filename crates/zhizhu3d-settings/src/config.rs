//! Configuration and settings management for ZHIZHU3D
//!
//! Supports JSON and TOML files stored in the platform config directory.
//!
//! Configuration is organized into sections:
//! - Generation service connection (endpoint, key variable, timeout)
//! - Editor defaults (canvas size, scale, minimum room side)
//! - Selection catalog (room types, lighting styles, furniture presets)
//! - Result history storage

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, SettingsError, SettingsResult};
use zhizhu3d_core::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_HISTORY_LIMIT,
    DEFAULT_MIN_ROOM_SIDE, DEFAULT_REQUEST_TIMEOUT_MS,
};
use zhizhu3d_core::{Catalog, EDITOR_SCALE};

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "zhizhu3d";
const CONFIG_FILE: &str = "config.toml";
const HISTORY_FILE: &str = "history.json";

/// Supported config file formats, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}

/// Generation service connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Workflow run URL; empty disables the service
    pub endpoint: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// End-user identifier sent with each run
    pub user: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            user: "zhizhu3d".to_string(),
        }
    }
}

impl ServiceSettings {
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty()
    }
}

/// Editor defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Millimeters per editor pixel
    pub scale: f64,
    /// Smallest room side accepted for generation (editor pixels)
    pub min_room_side: f64,
    /// Initial room type; the catalog's first entry when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_room_type: Option<String>,
    /// Initial lighting style; the catalog's first entry when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lighting_style: Option<String>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            scale: EDITOR_SCALE,
            min_room_side: DEFAULT_MIN_ROOM_SIDE,
            default_room_type: None,
            default_lighting_style: None,
        }
    }
}

/// Result history storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    pub max_entries: usize,
    /// History file; the platform config dir when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_HISTORY_LIMIT,
            path: None,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceSettings,
    pub editor: EditorSettings,
    pub catalog: Catalog,
    pub history: HistorySettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config directory for the application.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform("no config directory".to_string()).into()
            })
    }

    /// Default config file location.
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, else the default file if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| SettingsError::SaveError(e.to_string()))?
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let service = &self.service;
        if service.timeout_ms == 0 {
            return Err(SettingsError::invalid("service.timeout_ms", "must be > 0"));
        }
        if service.is_configured()
            && !(service.endpoint.starts_with("http://") || service.endpoint.starts_with("https://"))
        {
            return Err(SettingsError::invalid(
                "service.endpoint",
                "must be an http(s) URL",
            ));
        }
        if service.api_key_env.trim().is_empty() {
            return Err(SettingsError::invalid("service.api_key_env", "must not be empty"));
        }

        let editor = &self.editor;
        if !(editor.canvas_width > 0.0 && editor.canvas_height > 0.0) {
            return Err(SettingsError::invalid("editor.canvas", "dimensions must be > 0"));
        }
        if !(editor.scale > 0.0 && editor.scale.is_finite()) {
            return Err(SettingsError::invalid("editor.scale", "must be > 0"));
        }
        if !(editor.min_room_side >= 0.0) {
            return Err(SettingsError::invalid("editor.min_room_side", "must be >= 0"));
        }

        let catalog = &self.catalog;
        if catalog.room_types.is_empty() {
            return Err(SettingsError::invalid("catalog.room_types", "must not be empty"));
        }
        if catalog.lighting_styles.is_empty() {
            return Err(SettingsError::invalid("catalog.lighting_styles", "must not be empty"));
        }
        if catalog.presets.is_empty() {
            return Err(SettingsError::invalid("catalog.presets", "must not be empty"));
        }
        for preset in catalog.presets.iter() {
            if preset.name.trim().is_empty() {
                return Err(SettingsError::invalid("catalog.presets", "preset name is empty"));
            }
            if !(preset.width > 0.0 && preset.height > 0.0) {
                return Err(SettingsError::invalid(
                    "catalog.presets",
                    format!("'{}' must have a positive size", preset.name),
                ));
            }
        }
        if let Some(label) = &editor.default_room_type {
            catalog
                .check_room_type(label)
                .map_err(|e| SettingsError::invalid("editor.default_room_type", e.to_string()))?;
        }
        if let Some(label) = &editor.default_lighting_style {
            catalog.check_lighting_style(label).map_err(|e| {
                SettingsError::invalid("editor.default_lighting_style", e.to_string())
            })?;
        }

        if self.history.max_entries == 0 {
            return Err(SettingsError::invalid("history.max_entries", "must be > 0"));
        }

        Ok(())
    }

    /// History file location: the configured path, else the config dir.
    pub fn history_path(&self) -> SettingsResult<PathBuf> {
        match &self.history.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(HISTORY_FILE)),
        }
    }

    /// Initial room type selection.
    pub fn room_type(&self) -> Option<&str> {
        self.editor
            .default_room_type
            .as_deref()
            .or_else(|| self.catalog.default_room_type())
    }

    /// Initial lighting style selection.
    pub fn lighting_style(&self) -> Option<&str> {
        self.editor
            .default_lighting_style
            .as_deref()
            .or_else(|| self.catalog.default_lighting_style())
    }
}
