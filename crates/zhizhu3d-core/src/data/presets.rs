//! Furniture presets
//!
//! A preset fixes the label and default footprint of a furniture item.
//! The default library mirrors the picker shown next to the editor canvas.

use serde::{Deserialize, Serialize};

/// Named furniture template (footprint in editor pixels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurniturePreset {
    /// Label emitted in the furniture contour string
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl FurniturePreset {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// Ordered set of furniture presets, looked up by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetLibrary {
    presets: Vec<FurniturePreset>,
}

impl PresetLibrary {
    /// Create an empty preset library
    pub fn new() -> Self {
        Self {
            presets: Vec::new(),
        }
    }

    /// Library with the standard presets: bed, sofa, table, chair, cabinet, wall art.
    pub fn standard() -> Self {
        Self {
            presets: vec![
                FurniturePreset::new("床", 200.0, 150.0),
                FurniturePreset::new("沙发", 200.0, 90.0),
                FurniturePreset::new("桌子", 120.0, 60.0),
                FurniturePreset::new("椅子", 50.0, 50.0),
                FurniturePreset::new("柜子", 150.0, 60.0),
                FurniturePreset::new("挂画", 80.0, 60.0),
            ],
        }
    }

    /// Add a preset, replacing any preset with the same name in place
    pub fn add(&mut self, preset: FurniturePreset) {
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
    }

    /// Get a preset by name
    pub fn get(&self, name: &str) -> Option<&FurniturePreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FurniturePreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Vec<FurniturePreset>> for PresetLibrary {
    fn from(presets: Vec<FurniturePreset>) -> Self {
        let mut library = Self::new();
        for preset in presets {
            library.add(preset);
        }
        library
    }
}
