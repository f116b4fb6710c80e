//! File I/O operations (save, load, new) for designer state.

use super::{DesignerState, UNTITLED};

impl DesignerState {
    /// Save scene to file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        use crate::serialization::SceneFile;

        let mut file = SceneFile::new(&self.design_name).with_scene(self.canvas.scene());
        file.room_type = self.room_type.clone();
        file.lighting_style = self.lighting_style.clone();
        file.save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;

        Ok(())
    }

    /// Load scene from file.
    ///
    /// Selections missing from the file or from the catalog fall back to the
    /// catalog defaults.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        use crate::serialization::SceneFile;

        let file = SceneFile::load_from_file(&path)?;
        self.canvas.replace_scene(file.to_scene());

        self.room_type = if self.catalog.check_room_type(&file.room_type).is_ok() {
            file.room_type.clone()
        } else {
            if !file.room_type.is_empty() {
                tracing::warn!("Unknown room type '{}' in scene file", file.room_type);
            }
            self.catalog.default_room_type().unwrap_or_default().to_string()
        };
        self.lighting_style = if self.catalog.check_lighting_style(&file.lighting_style).is_ok() {
            file.lighting_style.clone()
        } else {
            if !file.lighting_style.is_empty() {
                tracing::warn!("Unknown lighting style '{}' in scene file", file.lighting_style);
            }
            self.catalog
                .default_lighting_style()
                .unwrap_or_default()
                .to_string()
        };

        self.design_name = file.metadata.name.clone();
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        self.last_result = None;
        self.clear_history();

        Ok(())
    }

    /// Create new scene (clear all).
    pub fn new_design(&mut self) {
        self.canvas.replace_scene(crate::model::Scene::new());
        self.current_file_path = None;
        self.is_modified = false;
        self.design_name = UNTITLED.to_string();
        self.last_result = None;
        self.clear_history();
    }

    /// Get display name for the scene.
    pub fn display_name(&self) -> String {
        let name = if let Some(path) = &self.current_file_path {
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&self.design_name)
        } else {
            &self.design_name
        };

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
