//! Shape model: the room, furniture items and their identities.

mod scene;

pub use scene::{RemovedShape, Scene};

use serde::{Deserialize, Serialize};
use std::fmt;

use zhizhu3d_core::constants::ROOM_LABEL;
use zhizhu3d_core::Rect;

/// Identifier of a furniture item, unique within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FurnitureId(pub u64);

impl fmt::Display for FurnitureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "furn-{}", self.0)
    }
}

/// Which shape an editor operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Room,
    Furniture(FurnitureId),
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room => write!(f, "room"),
            Self::Furniture(id) => write!(f, "{}", id),
        }
    }
}

impl From<FurnitureId> for ShapeId {
    fn from(id: FurnitureId) -> Self {
        Self::Furniture(id)
    }
}

/// A furniture item placed in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    pub id: FurnitureId,
    pub name: String,
    #[serde(flatten)]
    pub rect: Rect,
}

impl Furniture {
    pub fn new(id: FurnitureId, name: impl Into<String>, rect: Rect) -> Self {
        Self {
            id,
            name: name.into(),
            rect,
        }
    }
}

/// Read-only view of any shape, room included, for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeView<'a> {
    pub id: ShapeId,
    pub name: &'a str,
    pub rect: Rect,
}

impl ShapeView<'_> {
    pub fn is_room(&self) -> bool {
        self.id == ShapeId::Room
    }
}

pub(crate) fn room_view<'a>(rect: Rect) -> ShapeView<'a> {
    ShapeView {
        id: ShapeId::Room,
        name: ROOM_LABEL,
        rect,
    }
}
