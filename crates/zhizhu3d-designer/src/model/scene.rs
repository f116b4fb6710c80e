//! Scene state: the optional room and the ordered furniture list.
//!
//! The scene performs no clamping or containment checks. Coordinates are
//! stored exactly as given; keeping shapes on the canvas is the editor's job.

use tracing::debug;

use super::{room_view, Furniture, FurnitureId, ShapeId, ShapeView};
use zhizhu3d_core::Rect;

/// A shape taken out of the scene, with enough context to put it back.
#[derive(Debug, Clone, PartialEq)]
pub enum RemovedShape {
    Room(Rect),
    Furniture { index: usize, furniture: Furniture },
}

/// Room and furniture owned by one editor instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    room: Option<Rect>,
    furniture: Vec<Furniture>,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self {
            room: None,
            furniture: Vec::new(),
            next_id: 1,
        }
    }

    pub fn room(&self) -> Option<Rect> {
        self.room
    }

    pub fn has_room(&self) -> bool {
        self.room.is_some()
    }

    /// Replaces the room, returning the previous one.
    pub fn set_room(&mut self, room: Option<Rect>) -> Option<Rect> {
        std::mem::replace(&mut self.room, room)
    }

    /// Furniture in creation order.
    pub fn furniture(&self) -> &[Furniture] {
        &self.furniture
    }

    pub fn furniture_by_id(&self, id: FurnitureId) -> Option<&Furniture> {
        self.furniture.iter().find(|f| f.id == id)
    }

    pub fn furniture_count(&self) -> usize {
        self.furniture.len()
    }

    /// Generates a new unique furniture ID.
    pub fn generate_id(&mut self) -> FurnitureId {
        let id = FurnitureId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Sets the next ID to be generated. Never moves below an ID in use.
    pub fn set_next_id(&mut self, next: u64) {
        let floor = self
            .furniture
            .iter()
            .map(|f| f.id.0 + 1)
            .max()
            .unwrap_or(1);
        self.next_id = next.max(floor);
    }

    /// Appends a furniture item with a fresh ID.
    pub fn add_furniture(&mut self, name: impl Into<String>, rect: Rect) -> FurnitureId {
        let id = self.generate_id();
        self.furniture.push(Furniture::new(id, name, rect));
        id
    }

    /// Inserts an existing furniture item at `index` (clamped to the list length).
    ///
    /// Replaces any item with the same ID so identities stay unique.
    pub fn insert_furniture(&mut self, index: usize, furniture: Furniture) {
        self.furniture.retain(|f| f.id != furniture.id);
        if furniture.id.0 >= self.next_id {
            self.next_id = furniture.id.0 + 1;
        }
        let index = index.min(self.furniture.len());
        self.furniture.insert(index, furniture);
    }

    /// Current rectangle of a shape.
    pub fn rect(&self, id: ShapeId) -> Option<Rect> {
        match id {
            ShapeId::Room => self.room,
            ShapeId::Furniture(fid) => self.furniture_by_id(fid).map(|f| f.rect),
        }
    }

    /// Replaces the rectangle of a shape, returning the old one.
    /// Unknown IDs are ignored and yield `None`.
    pub fn set_rect(&mut self, id: ShapeId, rect: Rect) -> Option<Rect> {
        let slot = match id {
            ShapeId::Room => self.room.as_mut(),
            ShapeId::Furniture(fid) => self
                .furniture
                .iter_mut()
                .find(|f| f.id == fid)
                .map(|f| &mut f.rect),
        };
        match slot {
            Some(current) => Some(std::mem::replace(current, rect)),
            None => {
                debug!("Ignoring update of unknown shape {}", id);
                None
            }
        }
    }

    /// Renames a furniture item, returning its previous name.
    pub fn rename_furniture(&mut self, id: FurnitureId, name: impl Into<String>) -> Option<String> {
        let item = self.furniture.iter_mut().find(|f| f.id == id)?;
        Some(std::mem::replace(&mut item.name, name.into()))
    }

    /// Removes a shape. Unknown IDs are ignored and yield `None`.
    pub fn remove(&mut self, id: ShapeId) -> Option<RemovedShape> {
        match id {
            ShapeId::Room => self.room.take().map(RemovedShape::Room),
            ShapeId::Furniture(fid) => {
                let Some(index) = self.furniture.iter().position(|f| f.id == fid) else {
                    debug!("Ignoring removal of unknown shape {}", id);
                    return None;
                };
                let furniture = self.furniture.remove(index);
                Some(RemovedShape::Furniture { index, furniture })
            }
        }
    }

    /// Puts a removed shape back where it was.
    pub fn restore(&mut self, removed: RemovedShape) {
        match removed {
            RemovedShape::Room(rect) => self.room = Some(rect),
            RemovedShape::Furniture { index, furniture } => {
                self.insert_furniture(index, furniture)
            }
        }
    }

    /// All shapes for display: the room first, then furniture in order.
    pub fn shapes(&self) -> impl Iterator<Item = ShapeView<'_>> {
        self.room.map(room_view).into_iter().chain(
            self.furniture.iter().map(|f| ShapeView {
                id: ShapeId::Furniture(f.id),
                name: &f.name,
                rect: f.rect,
            }),
        )
    }

    /// Furniture not fully inside the room. Empty when there is no room.
    ///
    /// Informational only: such furniture is still serialized as-is.
    pub fn furniture_outside_room(&self) -> Vec<FurnitureId> {
        let Some(room) = self.room else {
            return Vec::new();
        };
        self.furniture
            .iter()
            .filter(|f| !room.contains_rect(&f.rect))
            .map(|f| f.id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.room.is_none() && self.furniture.is_empty()
    }

    /// Removes everything; the ID counter keeps running.
    pub fn clear(&mut self) {
        self.room = None;
        self.furniture.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
