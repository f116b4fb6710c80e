//! Scene serializer: converts the editor scene into the generation payload.
//!
//! Editor coordinates have their origin at the top-left with y growing down.
//! The payload uses a room-local frame with the origin at the room's
//! bottom-left and y growing up, in millimeters.

use std::fmt::Write;

use crate::model::{Furniture, Scene};
use zhizhu3d_core::{px_to_mm, to_wire_int, GenerationRequest, Rect, SceneError};

/// Formats a closed point list as `[(x1,y1),(x2,y2),...]`.
fn format_points(points: &[(f64, f64)]) -> String {
    let mut out = String::with_capacity(points.len() * 12 + 2);
    out.push('[');
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "({},{})", to_wire_int(*x), to_wire_int(*y));
    }
    out.push(']');
    out
}

/// Room polygon in its own frame: `[(0,0),(W,0),(W,H),(0,H),(0,0)]`.
pub fn room_contour(room: &Rect, scale: f64) -> String {
    let w = px_to_mm(room.width, scale);
    let h = px_to_mm(room.height, scale);
    format_points(&[(0.0, 0.0), (w, 0.0), (w, h), (0.0, h), (0.0, 0.0)])
}

/// Furniture position in the room-local frame, before scaling.
///
/// Returns the local bottom-left corner `(lx, ly)`.
pub fn local_origin(room: &Rect, item: &Rect) -> (f64, f64) {
    let lx = item.x - room.x;
    let ly = room.bottom() - item.bottom();
    (lx, ly)
}

/// Single furniture entry: `<name>:[(x,y),...],`.
///
/// Points run top-left, top-right, bottom-right, bottom-left and back to
/// top-left in the local frame. Coordinates outside the room are emitted
/// unchanged, negatives included.
pub fn furniture_contour(room: &Rect, furniture: &Furniture, scale: f64) -> String {
    let (lx, ly) = local_origin(room, &furniture.rect);
    let w = furniture.rect.width;
    let h = furniture.rect.height;
    let points = [
        (lx * scale, (ly + h) * scale),
        ((lx + w) * scale, (ly + h) * scale),
        ((lx + w) * scale, ly * scale),
        (lx * scale, ly * scale),
        (lx * scale, (ly + h) * scale),
    ];
    format!("{}:{},", furniture.name, format_points(&points))
}

/// Serializes a scene into a generation request.
///
/// Fails with [`SceneError::MissingRoom`] when no room is drawn. Performs no
/// validation of the labels or room size; the output is a pure function of
/// the inputs.
pub fn serialize_scene(
    scene: &Scene,
    style: &str,
    room_type: &str,
    scale: f64,
) -> Result<GenerationRequest, SceneError> {
    let room = scene.room().ok_or(SceneError::MissingRoom)?;

    let furnitures = scene
        .furniture()
        .iter()
        .map(|f| furniture_contour(&room, f, scale))
        .collect::<String>();

    Ok(GenerationRequest {
        contour: room_contour(&room, scale),
        furnitures,
        style: style.to_string(),
        room_type: room_type.to_string(),
    })
}
