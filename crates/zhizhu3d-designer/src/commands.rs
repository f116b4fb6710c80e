//! Undoable editor commands.
//!
//! Commands capture a change that already happened on the canvas. `apply`
//! replays it (redo), `undo` reverts it. Both are idempotent with respect to
//! the state they captured.

use crate::canvas::Canvas;
use crate::model::{FurnitureId, RemovedShape, ShapeId};
use zhizhu3d_core::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    AddFurniture(AddFurniture),
    RemoveShape(RemoveShape),
    SetRect(SetRect),
    SetRoom(SetRoom),
    RenameFurniture(RenameFurniture),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddFurniture {
    pub id: FurnitureId,
    /// Some while undone
    pub removed: Option<RemovedShape>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveShape {
    pub id: ShapeId,
    /// Some while applied (shape is off the canvas)
    pub removed: Option<RemovedShape>,
}

/// Move or resize: swaps between two rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRect {
    pub id: ShapeId,
    pub old: Rect,
    pub new: Rect,
    pub name: &'static str,
}

/// Room drawn or cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRoom {
    pub old: Option<Rect>,
    pub new: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameFurniture {
    pub id: FurnitureId,
    pub old: String,
    pub new: String,
}

impl DesignerCommand {
    pub fn apply(&mut self, canvas: &mut Canvas) {
        match self {
            DesignerCommand::AddFurniture(cmd) => {
                if let Some(removed) = cmd.removed.take() {
                    canvas.restore_shape(removed);
                }
            }
            DesignerCommand::RemoveShape(cmd) => {
                if cmd.removed.is_none() {
                    cmd.removed = canvas.delete_shape(cmd.id);
                }
            }
            DesignerCommand::SetRect(cmd) => {
                canvas.set_shape_rect(cmd.id, cmd.new);
            }
            DesignerCommand::SetRoom(cmd) => {
                canvas.scene_mut().set_room(cmd.new);
            }
            DesignerCommand::RenameFurniture(cmd) => {
                canvas.rename_furniture(cmd.id, cmd.new.clone());
            }
        }
    }

    pub fn undo(&mut self, canvas: &mut Canvas) {
        match self {
            DesignerCommand::AddFurniture(cmd) => {
                if cmd.removed.is_none() {
                    cmd.removed = canvas.delete_shape(ShapeId::Furniture(cmd.id));
                }
            }
            DesignerCommand::RemoveShape(cmd) => {
                if let Some(removed) = cmd.removed.take() {
                    canvas.restore_shape(removed);
                }
            }
            DesignerCommand::SetRect(cmd) => {
                canvas.set_shape_rect(cmd.id, cmd.old);
            }
            DesignerCommand::SetRoom(cmd) => {
                canvas.scene_mut().set_room(cmd.old);
            }
            DesignerCommand::RenameFurniture(cmd) => {
                canvas.rename_furniture(cmd.id, cmd.old.clone());
            }
        }
    }

    /// Name of the command for display.
    pub fn name(&self) -> &str {
        match self {
            DesignerCommand::AddFurniture(_) => "Add Furniture",
            DesignerCommand::RemoveShape(_) => "Delete Shape",
            DesignerCommand::SetRect(cmd) => cmd.name,
            DesignerCommand::SetRoom(cmd) => match cmd.new {
                Some(_) => "Draw Room",
                None => "Clear Room",
            },
            DesignerCommand::RenameFurniture(_) => "Rename Furniture",
        }
    }
}
