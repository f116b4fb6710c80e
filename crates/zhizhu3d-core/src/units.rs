//! Unit conversion utilities
//!
//! The editor works in screen pixels; the generation service expects
//! millimeters. One editor pixel is `EDITOR_SCALE` millimeters.

/// Millimeters per editor pixel.
pub const EDITOR_SCALE: f64 = 10.0;

/// Convert an editor length to millimeters with the given scale.
pub fn px_to_mm(value_px: f64, scale: f64) -> f64 {
    value_px * scale
}

/// Round a scaled coordinate to the integer emitted on the wire.
///
/// Halves round away from zero and negative zero collapses to `0`.
pub fn to_wire_int(value: f64) -> i64 {
    value.round() as i64
}

/// Format an editor length as a millimeter label, e.g. `"1000mm"`.
pub fn format_dimension(value_px: f64, scale: f64) -> String {
    format!("{}mm", to_wire_int(px_to_mm(value_px, scale)))
}
