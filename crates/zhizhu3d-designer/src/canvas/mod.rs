//! Canvas: the interactive editor over a [`Scene`].
//!
//! Translates pointer gestures into scene mutations. The canvas keeps shapes
//! within its visible area while they are manipulated; the scene itself
//! never clamps.

mod operations;
mod types;

pub use types::{PointerEvent, ResizeHandle, RoomDraw};

use tracing::debug;

use crate::model::{Furniture, Scene, ShapeView};
use zhizhu3d_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use zhizhu3d_core::{Point, Rect};

/// Editor state: the scene plus the active gesture and canvas bounds.
#[derive(Debug, Clone)]
pub struct Canvas {
    scene: Scene,
    bounds: Rect,
    drawing: Option<RoomDraw>,
}

impl Canvas {
    /// Creates a canvas of the default size.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    /// Creates a canvas with specified dimensions.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            scene: Scene::new(),
            bounds: Rect::new(0.0, 0.0, width, height),
            drawing: None,
        }
    }

    /// Sets the canvas size. Existing shapes are left where they are.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.bounds = Rect::new(0.0, 0.0, width, height);
    }

    /// Visible editor area, origin at the top-left.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub(crate) fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Replaces the whole scene (file load). Cancels any gesture.
    pub fn replace_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.drawing = None;
    }

    pub fn room(&self) -> Option<Rect> {
        self.scene.room()
    }

    pub fn furniture(&self) -> &[Furniture] {
        self.scene.furniture()
    }

    /// Gets all shapes on the canvas, room first.
    pub fn shapes(&self) -> impl Iterator<Item = ShapeView<'_>> {
        self.scene.shapes()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing.is_some()
    }

    /// Starts drawing a room at `point`.
    ///
    /// Only effective when no room exists and the point is on the canvas.
    /// Returns whether a gesture started.
    pub fn begin_room_draw(&mut self, point: Point) -> bool {
        if self.scene.has_room() {
            debug!("Room already exists, ignoring draw at {}", point);
            return false;
        }
        if !self.bounds.contains_point(point) {
            debug!("Pointer {} outside canvas, ignoring draw", point);
            return false;
        }
        self.drawing = Some(RoomDraw { anchor: point });
        true
    }

    /// Updates the live room preview to span anchor and `point`.
    ///
    /// The pointer is clamped to the canvas. Returns the previewed room,
    /// or `None` when no gesture is active.
    pub fn update_room_draw(&mut self, point: Point) -> Option<Rect> {
        let draw = self.drawing?;
        let point = Point::new(
            point.x.clamp(self.bounds.x, self.bounds.right()),
            point.y.clamp(self.bounds.y, self.bounds.bottom()),
        );
        let room = Rect::from_corners(draw.anchor, point);
        self.scene.set_room(Some(room));
        Some(room)
    }

    /// Finishes the gesture, returning the room it produced, if any.
    pub fn end_room_draw(&mut self) -> Option<Rect> {
        self.drawing.take()?;
        self.scene.room()
    }

    /// Discards the current room so a new one can be drawn.
    pub fn clear_room(&mut self) -> Option<Rect> {
        self.drawing = None;
        self.scene.set_room(None)
    }

    /// Routes a raw pointer event to the drawing gesture.
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
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
