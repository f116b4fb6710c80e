//! Error handling for ZHIZHU3D
//!
//! Provides error types for the layers of the layout designer:
//! - Scene errors (missing or degenerate room, catalog lookups)
//! - Generation errors (calls to the external workflow service)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Scene error type
///
/// Raised while turning the editor scene into a generation request.
/// These never reach the network layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// No room has been drawn yet
    #[error("No room drawn: draw a room before generating")]
    MissingRoom,

    /// The room has no usable area
    #[error("Room is too small: {width}x{height} (minimum side {min_side})")]
    DegenerateRoom {
        /// Room width in editor pixels.
        width: f64,
        /// Room height in editor pixels.
        height: f64,
        /// Configured minimum side length in editor pixels.
        min_side: f64,
    },

    /// Selected room type is not in the catalog
    #[error("Unknown room type: {label}")]
    UnknownRoomType {
        /// The rejected label.
        label: String,
    },

    /// Selected lighting style is not in the catalog
    #[error("Unknown lighting style: {label}")]
    UnknownLightingStyle {
        /// The rejected label.
        label: String,
    },

    /// Furniture preset name is not in the catalog
    #[error("Unknown furniture preset: {name}")]
    UnknownPreset {
        /// The rejected preset name.
        name: String,
    },
}

/// Generation service error type
///
/// Represents failures talking to the external workflow service.
/// The scene that produced the request is never modified by these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// No API key available for the service
    #[error("API key not set (expected in ${variable})")]
    MissingApiKey {
        /// Environment variable that was consulted.
        variable: String,
    },

    /// Service endpoint is not a usable URL
    #[error("Invalid service endpoint: {endpoint}")]
    InvalidEndpoint {
        /// The configured endpoint.
        endpoint: String,
    },

    /// Request did not complete in time
    #[error("Generation request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Transport-level failure (DNS, TLS, connection reset)
    #[error("Transport error: {reason}")]
    Transport {
        /// The reason reported by the HTTP client.
        reason: String,
    },

    /// Service answered with a non-success status
    #[error("Service returned HTTP {status}: {message}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the body, or the raw body.
        message: String,
    },

    /// Body could not be read as JSON
    #[error("Invalid service response: {reason}")]
    InvalidResponse {
        /// The reason the body was rejected.
        reason: String,
    },
}

/// Main error type for ZHIZHU3D
///
/// Everything `DesignerState::generate` can fail with.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Generation service error
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl Error {
    /// Check if this is a missing-room error
    pub fn is_missing_room(&self) -> bool {
        matches!(self, Error::Scene(SceneError::MissingRoom))
    }

    /// Check if this is a scene error
    pub fn is_scene_error(&self) -> bool {
        matches!(self, Error::Scene(_))
    }

    /// Check if this is a generation service error
    pub fn is_generation_error(&self) -> bool {
        matches!(self, Error::Generation(_))
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Generation(GenerationError::Timeout { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
