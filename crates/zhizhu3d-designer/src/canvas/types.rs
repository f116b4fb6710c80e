//! Canvas type definitions: RoomDraw, PointerEvent, ResizeHandle.

use zhizhu3d_core::{Point, Rect};

/// In-progress room drawing gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomDraw {
    /// Where the pointer went down
    pub anchor: Point,
}

/// Pointer input delivered by the hosting UI, in canvas-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press on the canvas background
    Down(Point),
    Move(Point),
    Up,
    /// Pointer left the canvas; ends any gesture like `Up`
    Leave,
}

/// Resize handles on a shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl ResizeHandle {
    fn moves_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    fn moves_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    fn moves_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    /// Rectangle after dragging this handle by `(dx, dy)`.
    ///
    /// The opposite edge stays fixed. A side dragged past its opposite edge
    /// collapses to zero at that edge instead of flipping.
    pub fn apply(self, rect: &Rect, dx: f64, dy: f64) -> Rect {
        let (mut x1, mut y1) = (rect.x, rect.y);
        let (mut x2, mut y2) = (rect.right(), rect.bottom());

        if self.moves_left() {
            x1 = (x1 + dx).min(x2);
        }
        if self.moves_right() {
            x2 = (x2 + dx).max(x1);
        }
        if self.moves_top() {
            y1 = (y1 + dy).min(y2);
        }
        if self.moves_bottom() {
            y2 = (y2 + dy).max(y1);
        }

        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }
}
