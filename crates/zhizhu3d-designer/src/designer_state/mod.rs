//! Designer state manager for UI integration.
//! Owns the editor canvas, the catalog selections and the command history.
//!
//! This module is split into submodules:
//! - `history`: Undo/redo functionality
//! - `shapes`: Room drawing and furniture operations
//! - `generate`: Payload building and the generation call
//! - `file_io`: Save/load operations

mod file_io;
mod generate;
mod history;
mod shapes;

use crate::commands::DesignerCommand;
use crate::Canvas;
use zhizhu3d_core::constants::DEFAULT_MIN_ROOM_SIDE;
use zhizhu3d_core::{Catalog, GenerationResult, SceneError, EDITOR_SCALE};

pub(crate) const UNTITLED: &str = "Untitled";

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub catalog: Catalog,
    pub room_type: String,
    pub lighting_style: String,
    /// Millimeters per editor pixel
    pub scale: f64,
    /// Smallest room side accepted by `build_payload` (editor pixels)
    pub min_room_side: f64,
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
    pub last_result: Option<GenerationResult>,
    pub(crate) undo_stack: Vec<DesignerCommand>,
    pub(crate) redo_stack: Vec<DesignerCommand>,
}

impl DesignerState {
    /// Creates a new designer state with the standard catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::default())
    }

    /// Creates a designer state over `catalog`, selecting its first entries.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let room_type = catalog.default_room_type().unwrap_or_default().to_string();
        let lighting_style = catalog
            .default_lighting_style()
            .unwrap_or_default()
            .to_string();
        Self {
            canvas: Canvas::new(),
            catalog,
            room_type,
            lighting_style,
            scale: EDITOR_SCALE,
            min_room_side: DEFAULT_MIN_ROOM_SIDE,
            current_file_path: None,
            is_modified: false,
            design_name: UNTITLED.to_string(),
            last_result: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Selects the room type. Labels outside the catalog are rejected.
    pub fn set_room_type(&mut self, label: &str) -> Result<(), SceneError> {
        self.catalog.check_room_type(label)?;
        if self.room_type != label {
            self.room_type = label.to_string();
            self.is_modified = true;
        }
        Ok(())
    }

    /// Selects the lighting style. Labels outside the catalog are rejected.
    pub fn set_lighting_style(&mut self, label: &str) -> Result<(), SceneError> {
        self.catalog.check_lighting_style(label)?;
        if self.lighting_style != label {
            self.lighting_style = label.to_string();
            self.is_modified = true;
        }
        Ok(())
    }

    /// Sets the canvas size used to bound manipulation.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        debug_assert!(
            width.is_finite() && height.is_finite(),
            "canvas size must be finite, got {width}x{height}"
        );
        self.canvas.set_canvas_size(width, height);
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
