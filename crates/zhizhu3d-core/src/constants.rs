//! Shared constants for the layout designer.

/// Display label of the room shape.
pub const ROOM_LABEL: &str = "房间";

/// Position where newly added furniture is placed (editor pixels).
pub const DEFAULT_FURNITURE_X: f64 = 20.0;
pub const DEFAULT_FURNITURE_Y: f64 = 20.0;

/// Default editor canvas size (editor pixels).
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Smallest room side accepted by the generate action (editor pixels).
pub const DEFAULT_MIN_ROOM_SIDE: f64 = 1.0;

/// Maximum number of undoable editor commands.
pub const MAX_UNDO_DEPTH: usize = 50;

/// Default number of generation results kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Default request timeout for the generation service.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 120_000;

/// Environment variable consulted for the generation service API key.
pub const DEFAULT_API_KEY_ENV: &str = "ZHIZHU3D_API_KEY";
