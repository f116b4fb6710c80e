//! Shape manipulation operations for Canvas.

use tracing::debug;

use super::types::ResizeHandle;
use super::Canvas;
use crate::model::{FurnitureId, RemovedShape, ShapeId};
use zhizhu3d_core::constants::{DEFAULT_FURNITURE_X, DEFAULT_FURNITURE_Y};
use zhizhu3d_core::{FurniturePreset, Rect};

impl Canvas {
    /// Adds a furniture item from a preset at the default position.
    pub fn add_furniture(&mut self, preset: &FurniturePreset) -> FurnitureId {
        let rect = Rect::new(
            DEFAULT_FURNITURE_X,
            DEFAULT_FURNITURE_Y,
            preset.width,
            preset.height,
        );
        let id = self.scene_mut().add_furniture(preset.name.clone(), rect);
        debug!("Added {} '{}'", id, preset.name);
        id
    }

    /// Renames a furniture item, returning the previous name.
    pub fn rename_furniture(&mut self, id: FurnitureId, name: impl Into<String>) -> Option<String> {
        self.scene_mut().rename_furniture(id, name)
    }

    /// Moves a shape to `(x, y)`, kept inside the canvas.
    ///
    /// Returns the previous rectangle, or `None` if the shape does not exist.
    pub fn move_shape(&mut self, id: ShapeId, x: f64, y: f64) -> Option<Rect> {
        let current = self.scene().rect(id)?;
        let pos = current.clamp_position(x, y, &self.bounds());
        self.scene_mut().set_rect(id, current.moved_to(pos.x, pos.y))
    }

    /// Sets size and position together, kept inside the canvas.
    ///
    /// Returns the previous rectangle, or `None` if the shape does not exist.
    pub fn resize_shape(
        &mut self,
        id: ShapeId,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
    ) -> Option<Rect> {
        self.scene().rect(id)?;
        let rect = Rect::new(x, y, width, height).clamped_to(&self.bounds());
        self.scene_mut().set_rect(id, rect)
    }

    /// Drags a resize handle by `(dx, dy)`.
    pub fn resize_by_handle(
        &mut self,
        id: ShapeId,
        handle: ResizeHandle,
        dx: f64,
        dy: f64,
    ) -> Option<Rect> {
        let current = self.scene().rect(id)?;
        let next = handle.apply(&current, dx, dy);
        self.resize_shape(id, next.width, next.height, next.x, next.y)
    }

    /// Deletes a shape. Unknown IDs are a no-op returning `None`.
    pub fn delete_shape(&mut self, id: ShapeId) -> Option<RemovedShape> {
        self.scene_mut().remove(id)
    }

    /// Puts back a deleted shape (undo).
    pub fn restore_shape(&mut self, removed: RemovedShape) {
        self.scene_mut().restore(removed);
    }

    /// Sets a rectangle without canvas clamping (undo/redo replay).
    pub(crate) fn set_shape_rect(&mut self, id: ShapeId, rect: Rect) -> Option<Rect> {
        self.scene_mut().set_rect(id, rect)
    }
}
