//! Selection catalog for the generate form
//!
//! Holds the room-type and lighting-style labels offered next to the editor,
//! together with the furniture presets. Labels are sent to the generation
//! service verbatim.

use serde::{Deserialize, Serialize};

use super::presets::PresetLibrary;
use crate::error::SceneError;

/// Room-type labels, the first entry is the default selection.
pub fn standard_room_types() -> Vec<String> {
    ["客厅", "餐厅", "卧室", "厨房", "卫生间", "走廊"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Lighting-style labels, the first entry is the default selection.
pub fn standard_lighting_styles() -> Vec<String> {
    ["无主灯", "主灯"].iter().map(|s| s.to_string()).collect()
}

/// Everything a user can pick from when building a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "standard_room_types")]
    pub room_types: Vec<String>,
    #[serde(default = "standard_lighting_styles")]
    pub lighting_styles: Vec<String>,
    #[serde(default)]
    pub presets: PresetLibrary,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            room_types: standard_room_types(),
            lighting_styles: standard_lighting_styles(),
            presets: PresetLibrary::standard(),
        }
    }
}

impl Catalog {
    pub fn default_room_type(&self) -> Option<&str> {
        self.room_types.first().map(String::as_str)
    }

    pub fn default_lighting_style(&self) -> Option<&str> {
        self.lighting_styles.first().map(String::as_str)
    }

    /// Checks that `label` is a known room type.
    pub fn check_room_type(&self, label: &str) -> Result<(), SceneError> {
        if self.room_types.iter().any(|t| t == label) {
            Ok(())
        } else {
            Err(SceneError::UnknownRoomType {
                label: label.to_string(),
            })
        }
    }

    pub fn check_lighting_style(&self, label: &str) -> Result<(), SceneError> {
        if self.lighting_styles.iter().any(|s| s == label) {
            Ok(())
        } else {
            Err(SceneError::UnknownLightingStyle {
                label: label.to_string(),
            })
        }
    }
}
