//! Shape operations (room drawing, furniture add/move/resize/delete) for designer state.
//!
//! Each completed edit is recorded as a command so it can be undone.

use super::DesignerState;
use crate::canvas::{PointerEvent, ResizeHandle};
use crate::commands::*;
use crate::model::{FurnitureId, ShapeId};
use zhizhu3d_core::{FurniturePreset, Point, Rect, SceneError};

impl DesignerState {
    /// Starts a room drawing gesture. See [`crate::Canvas::begin_room_draw`].
    pub fn begin_room_draw(&mut self, point: Point) -> bool {
        self.canvas.begin_room_draw(point)
    }

    /// Updates the live room preview.
    pub fn update_room_draw(&mut self, point: Point) -> Option<Rect> {
        self.canvas.update_room_draw(point)
    }

    /// Ends the gesture and records the drawn room.
    pub fn end_room_draw(&mut self) -> Option<Rect> {
        let room = self.canvas.end_room_draw()?;
        self.push_command(DesignerCommand::SetRoom(SetRoom {
            old: None,
            new: Some(room),
        }));
        Some(room)
    }

    /// Routes a pointer event through the recorded drawing operations.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(p) => {
                self.begin_room_draw(p);
            }
            PointerEvent::Move(p) => {
                self.update_room_draw(p);
            }
            PointerEvent::Up | PointerEvent::Leave => {
                self.end_room_draw();
            }
        }
    }

    /// Clears the current room so a new one can be drawn.
    pub fn clear_room(&mut self) -> Option<Rect> {
        let old = self.canvas.room()?;
        self.push_command(DesignerCommand::SetRoom(SetRoom {
            old: Some(old),
            new: None,
        }));
        Some(old)
    }

    /// Draws a room between two corners, replacing any existing room.
    ///
    /// Runs the same gesture a pointer drag would, so the corners are
    /// subject to the canvas bounds. A start corner off the canvas leaves
    /// the scene untouched. The replacement is one undo step.
    pub fn draw_room(&mut self, from: Point, to: Point) -> Option<Rect> {
        if !self.canvas.bounds().contains_point(from) {
            tracing::debug!("Room corner {} outside canvas, keeping current room", from);
            return None;
        }

        let old = self.canvas.clear_room();
        let new = if self.canvas.begin_room_draw(from) {
            self.canvas.update_room_draw(to);
            self.canvas.end_room_draw()
        } else {
            None
        };
        if new.is_none() {
            self.canvas.scene_mut().set_room(old);
            return None;
        }

        self.push_command(DesignerCommand::SetRoom(SetRoom { old, new }));
        new
    }

    /// Adds furniture from a catalog preset name.
    pub fn add_furniture(&mut self, preset_name: &str) -> Result<FurnitureId, SceneError> {
        let preset = self
            .catalog
            .presets
            .get(preset_name)
            .cloned()
            .ok_or_else(|| SceneError::UnknownPreset {
                name: preset_name.to_string(),
            })?;
        Ok(self.add_furniture_preset(&preset))
    }

    /// Adds furniture from any preset, catalog or not.
    pub fn add_furniture_preset(&mut self, preset: &FurniturePreset) -> FurnitureId {
        let id = self.canvas.add_furniture(preset);
        self.push_command(DesignerCommand::AddFurniture(AddFurniture { id, removed: None }));
        id
    }

    /// Moves a shape. Unknown shapes are ignored.
    pub fn move_shape(&mut self, id: ShapeId, x: f64, y: f64) -> bool {
        let Some(old) = self.canvas.move_shape(id, x, y) else {
            return false;
        };
        self.record_rect_change(id, old, "Move Shape")
    }

    /// Sets size and position of a shape. Unknown shapes are ignored.
    pub fn resize_shape(&mut self, id: ShapeId, width: f64, height: f64, x: f64, y: f64) -> bool {
        let Some(old) = self.canvas.resize_shape(id, width, height, x, y) else {
            return false;
        };
        self.record_rect_change(id, old, "Resize Shape")
    }

    /// Drags a resize handle of a shape.
    pub fn resize_by_handle(&mut self, id: ShapeId, handle: ResizeHandle, dx: f64, dy: f64) -> bool {
        let Some(old) = self.canvas.resize_by_handle(id, handle, dx, dy) else {
            return false;
        };
        self.record_rect_change(id, old, "Resize Shape")
    }

    fn record_rect_change(&mut self, id: ShapeId, old: Rect, name: &'static str) -> bool {
        let Some(new) = self.canvas.scene().rect(id) else {
            return false;
        };
        if new == old {
            return true;
        }
        self.push_command(DesignerCommand::SetRect(SetRect { id, old, new, name }));
        true
    }

    /// Deletes the room or a furniture item. Unknown shapes are ignored.
    pub fn delete_shape(&mut self, id: ShapeId) -> bool {
        if self.canvas.scene().rect(id).is_none() {
            tracing::debug!("Ignoring delete of unknown shape {}", id);
            return false;
        }
        self.push_command(DesignerCommand::RemoveShape(RemoveShape { id, removed: None }));
        true
    }

    /// Renames a furniture item.
    pub fn rename_furniture(&mut self, id: FurnitureId, name: &str) -> bool {
        let Some(old) = self.canvas.rename_furniture(id, name) else {
            return false;
        };
        if old != name {
            self.push_command(DesignerCommand::RenameFurniture(RenameFurniture {
                id,
                old,
                new: name.to_string(),
            }));
        }
        true
    }
}
