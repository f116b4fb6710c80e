//! # ZHIZHU3D
//!
//! Room and furniture layout editor for lighting-layout generation.
//!
//! A user draws one rectangular room, places furniture presets inside it,
//! picks a room type and a lighting style, and submits the scene to an
//! external workflow service that returns a 2D lighting plan.
//!
//! ## Architecture
//!
//! ZHIZHU3D is organized as a workspace with multiple crates:
//!
//! 1. **zhizhu3d-core** - Geometry, units, catalogs, wire types, errors, service trait
//! 2. **zhizhu3d-designer** - Editor canvas, undo/redo, scene serializer, scene files, result history
//! 3. **zhizhu3d-communication** - HTTP workflow client and response parsing
//! 4. **zhizhu3d-settings** - Configuration files and validation
//! 5. **zhizhu3d** - Command-line binary that integrates all crates

pub mod cli;

pub use zhizhu3d_core::{
    Catalog, Error, FurniturePreset, GenerationRequest, GenerationResult, GenerationService,
    Point, Rect, Result, SceneError,
};

pub use zhizhu3d_designer::{
    serialize_scene, Canvas, DesignerState, ResultHistory, Scene, SceneFile, ShapeId,
};

pub use zhizhu3d_communication::{ClientConfig, HttpGenerationClient, NoOpGenerationService};

pub use zhizhu3d_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so command output stays clean on stdout
/// - RUST_LOG environment variable support (defaults to `default_level`)
pub fn init_logging(format: LogFormat, default_level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string().to_lowercase()));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false),
            )
            .try_init()?,
    }

    Ok(())
}
