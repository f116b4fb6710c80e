//! Serialization and deserialization for scene files.
//!
//! Scenes are stored as versioned JSON documents holding the room, the
//! furniture list and the generate-form selections.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{Furniture, Scene};
use zhizhu3d_core::Rect;

/// Scene file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete scene file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub version: String,
    pub metadata: SceneMetadata,
    #[serde(default)]
    pub room: Option<Rect>,
    #[serde(default)]
    pub furniture: Vec<Furniture>,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub lighting_style: String,
}

/// Scene metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl SceneFile {
    /// Create a new, empty scene file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: SceneMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            room: None,
            furniture: Vec::new(),
            room_type: String::new(),
            lighting_style: String::new(),
        }
    }

    /// Capture the shapes of a scene.
    pub fn with_scene(mut self, scene: &Scene) -> Self {
        self.room = scene.room();
        self.furniture = scene.furniture().to_vec();
        self
    }

    /// Rebuild a scene. The ID counter resumes past the highest loaded ID.
    pub fn to_scene(&self) -> Scene {
        let mut scene = Scene::new();
        scene.set_room(self.room);
        for (index, item) in self.furniture.iter().enumerate() {
            scene.insert_furniture(index, item.clone());
        }
        scene.set_next_id(1);
        scene
    }

    /// Save scene to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize scene")?;
        std::fs::write(path.as_ref(), json).with_context(|| {
            format!("Failed to write scene file {}", path.as_ref().display())
        })?;
        Ok(())
    }

    /// Load scene from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read scene file {}", path.as_ref().display())
        })?;
        Self::from_json(&content)
    }

    /// Parse a scene document, rejecting unsupported major versions.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: SceneFile = serde_json::from_str(content).context("Failed to parse scene file")?;
        let major = file.version.split('.').next().unwrap_or_default();
        if major != "1" {
            bail!("Unsupported scene file version {}", file.version);
        }
        Ok(file)
    }
}
