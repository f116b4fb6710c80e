//! # ZHIZHU3D Designer
//!
//! Interactive room and furniture layout editor. A user draws one
//! rectangular room, places furniture presets on the canvas, and the scene
//! is serialized into the payload expected by the lighting-layout
//! generation service.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (selections, undo/redo, generate)
//!   └── Canvas (pointer gestures, canvas bounds)
//!         └── Scene (room + ordered furniture)
//!
//! Serializer (Scene -> GenerationRequest, pure)
//! SceneFile / ResultHistory (JSON persistence)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zhizhu3d_designer::DesignerState;
//! use zhizhu3d_core::Point;
//!
//! let mut state = DesignerState::new();
//! state.draw_room(Point::new(0.0, 0.0), Point::new(100.0, 80.0));
//! state.add_furniture("床")?;
//! let payload = state.build_payload()?;
//! ```

pub mod canvas;
pub mod commands;
pub mod designer_state;
pub mod model;
pub mod result_history;
pub mod serialization;
pub mod serializer;

pub use canvas::{Canvas, PointerEvent, ResizeHandle, RoomDraw};
pub use commands::DesignerCommand;
pub use designer_state::DesignerState;
pub use model::{Furniture, FurnitureId, RemovedShape, Scene, ShapeId, ShapeView};
pub use result_history::{HistoryEntry, ResultHistory};
pub use serialization::{SceneFile, SceneMetadata};
pub use serializer::{furniture_contour, room_contour, serialize_scene};
