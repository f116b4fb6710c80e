//! ZHIZHU3D Settings Crate
//!
//! Handles application configuration: the generation service connection,
//! editor defaults, the selection catalog and result-history storage.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, EditorSettings, HistorySettings, ServiceSettings, APP_DIR};
pub use error::{ConfigError, SettingsError, SettingsResult};
