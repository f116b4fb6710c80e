//! Command-line interface for ZHIZHU3D.
//!
//! Each subcommand writes its report to the given writer, so the binary
//! prints to stdout and tests capture into a buffer.

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::LogFormat;
use zhizhu3d_communication::{
    decode_image_data, ClientConfig, HttpGenerationClient, NoOpGenerationService,
};
use zhizhu3d_core::{format_dimension, GenerationService, Point, Rect};
use zhizhu3d_designer::{DesignerState, ResultHistory, ShapeId};
use zhizhu3d_settings::Config;

/// Command-line arguments for the ZHIZHU3D layout tool
#[derive(Parser, Debug)]
#[command(name = "zhizhu3d", author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (JSON or TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: tracing::Level,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the generation payload for a scene file
    Payload {
        scene: PathBuf,
    },
    /// Submit a scene to the generation service
    Generate {
        scene: PathBuf,
        /// Write the decoded lighting plan image here when the service returns one
        #[arg(long)]
        image_out: Option<PathBuf>,
        /// Do not record the result in the history
        #[arg(long)]
        no_history: bool,
    },
    /// List furniture presets, room types and lighting styles
    Presets,
    /// List stored generation results, newest first
    History {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Create a scene file from the command line
    NewScene {
        path: PathBuf,
        /// Room rectangle as x,y,width,height (editor pixels)
        #[arg(long, value_parser = parse_room)]
        room: [f64; 4],
        /// Furniture as name@x,y or name@x,y,width,height; repeatable
        #[arg(long = "furniture", value_parser = parse_furniture)]
        furniture: Vec<FurnitureArg>,
        #[arg(long)]
        room_type: Option<String>,
        /// Lighting style
        #[arg(long)]
        style: Option<String>,
        /// Scene name stored in the file
        #[arg(long)]
        name: Option<String>,
    },
}

/// A `--furniture` value.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureArg {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub size: Option<(f64, f64)>,
}

fn parse_numbers(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| format!("'{}' is not a number", part))
        })
        .collect()
}

/// Parses `x,y,width,height`.
pub fn parse_room(s: &str) -> Result<[f64; 4], String> {
    match parse_numbers(s)?.as_slice() {
        &[x, y, w, h] if w >= 0.0 && h >= 0.0 => Ok([x, y, w, h]),
        &[_, _, _, _] => Err("room width and height must not be negative".to_string()),
        _ => Err("expected x,y,width,height".to_string()),
    }
}

/// Parses `name@x,y` or `name@x,y,width,height`.
pub fn parse_furniture(s: &str) -> Result<FurnitureArg, String> {
    let (name, coords) = s
        .rsplit_once('@')
        .ok_or_else(|| "expected name@x,y".to_string())?;
    let name = name.trim();
    if name.is_empty() {
        return Err("furniture name is empty".to_string());
    }
    let (x, y, size) = match parse_numbers(coords)?.as_slice() {
        &[x, y] => (x, y, None),
        &[x, y, w, h] if w > 0.0 && h > 0.0 => (x, y, Some((w, h))),
        &[_, _, _, _] => return Err("furniture size must be positive".to_string()),
        _ => return Err("expected name@x,y or name@x,y,width,height".to_string()),
    };
    Ok(FurnitureArg {
        name: name.to_string(),
        x,
        y,
        size,
    })
}

/// Designer state seeded from the editor settings and catalog.
pub fn designer_from_config(config: &Config) -> DesignerState {
    let mut state = DesignerState::with_catalog(config.catalog.clone());
    state.scale = config.editor.scale;
    state.min_room_side = config.editor.min_room_side;
    state.set_canvas_size(config.editor.canvas_width, config.editor.canvas_height);
    if let Some(label) = config.room_type() {
        state.room_type = label.to_string();
    }
    if let Some(label) = config.lighting_style() {
        state.lighting_style = label.to_string();
    }
    state
}

fn load_scene(config: &Config, path: &Path) -> anyhow::Result<DesignerState> {
    let mut state = designer_from_config(config);
    state.load_from_file(path)?;
    Ok(state)
}

/// Service selected by the configuration.
pub fn service_from_config(config: &Config) -> anyhow::Result<Box<dyn GenerationService>> {
    let service = &config.service;
    if !service.is_configured() {
        warn!("No service endpoint configured, using offline service");
        return Ok(Box::new(NoOpGenerationService));
    }
    let client_config = ClientConfig::from_env(service.endpoint.clone(), &service.api_key_env)?
        .with_timeout(Duration::from_millis(service.timeout_ms))
        .with_user(service.user.clone());
    Ok(Box::new(HttpGenerationClient::new(client_config)?))
}

/// Runs one parsed command.
pub async fn run(args: &Args, out: &mut dyn Write) -> anyhow::Result<()> {
    let config =
        Config::load_or_default(args.config.as_deref()).context("Failed to load settings")?;

    match &args.command {
        Command::Payload { scene } => {
            let state = load_scene(&config, scene)?;
            let payload = state.build_payload()?;
            writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        }
        Command::Generate {
            scene,
            image_out,
            no_history,
        } => {
            let mut state = load_scene(&config, scene)?;
            let request = state.build_payload()?;
            let service = service_from_config(&config)?;
            let result = state.generate(service.as_ref()).await?;

            if let (Some(path), Some(data)) = (image_out, result.image_data()) {
                let bytes = decode_image_data(data)?;
                std::fs::write(path, bytes)
                    .with_context(|| format!("Failed to write image {}", path.display()))?;
                info!("Saved lighting plan to {}", path.display());
            }

            if !no_history {
                let history_path = config.history_path()?;
                let mut history = ResultHistory::load(&history_path, config.history.max_entries)?;
                history.push(request, result.clone());
                history.save(&history_path)?;
            }

            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        }
        Command::Presets => {
            let catalog = &config.catalog;
            writeln!(out, "Furniture presets:")?;
            for preset in catalog.presets.iter() {
                writeln!(
                    out,
                    "  {:<8} {} x {} ({} x {})",
                    preset.name,
                    preset.width,
                    preset.height,
                    format_dimension(preset.width, config.editor.scale),
                    format_dimension(preset.height, config.editor.scale)
                )?;
            }
            writeln!(out, "Room types: {}", catalog.room_types.join(", "))?;
            writeln!(out, "Lighting styles: {}", catalog.lighting_styles.join(", "))?;
        }
        Command::History { limit } => {
            let history =
                ResultHistory::load(config.history_path()?, config.history.max_entries)?;
            if history.is_empty() {
                writeln!(out, "No results yet")?;
            }
            let limit = limit.unwrap_or(usize::MAX);
            for entry in history.entries().iter().take(limit) {
                let summary = entry
                    .result
                    .download_url()
                    .or_else(|| entry.result.description())
                    .unwrap_or("-");
                writeln!(
                    out,
                    "{}  {}  {}/{}  {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    entry.id,
                    entry.request.room_type,
                    entry.request.style,
                    summary
                )?;
            }
        }
        Command::NewScene {
            path,
            room,
            furniture,
            room_type,
            style,
            name,
        } => {
            let mut state = build_scene(
                &config,
                *room,
                furniture,
                room_type.as_deref(),
                style.as_deref(),
            )?;
            if let Some(name) = name {
                state.design_name = name.clone();
            }
            state.save_to_file(path)?;
            writeln!(
                out,
                "Wrote {} ({} furniture item(s))",
                path.display(),
                state.canvas.furniture().len()
            )?;
        }
    }

    Ok(())
}

/// Builds a scene through the editor operations.
pub fn build_scene(
    config: &Config,
    room: [f64; 4],
    furniture: &[FurnitureArg],
    room_type: Option<&str>,
    style: Option<&str>,
) -> anyhow::Result<DesignerState> {
    let [x, y, w, h] = room;
    let canvas = Rect::new(0.0, 0.0, config.editor.canvas_width, config.editor.canvas_height);
    if !canvas.contains_rect(&Rect::new(x, y, w, h)) {
        bail!(
            "Room does not fit on the {}x{} canvas",
            canvas.width,
            canvas.height
        );
    }

    let mut state = designer_from_config(config);
    state
        .draw_room(Point::new(x, y), Point::new(x + w, y + h))
        .ok_or_else(|| anyhow!("Room origin ({}, {}) is outside the canvas", x, y))?;

    for item in furniture {
        let id = state.add_furniture(&item.name)?;
        let id = ShapeId::Furniture(id);
        let placed = state
            .canvas
            .scene()
            .rect(id)
            .ok_or_else(|| anyhow!("Furniture {} vanished after insert", item.name))?;
        let (fw, fh) = item.size.unwrap_or((placed.width, placed.height));
        let target = Rect::new(item.x, item.y, fw, fh);
        if !canvas.contains_rect(&target) {
            bail!(
                "Furniture '{}' at ({}, {}) size {}x{} does not fit on the {}x{} canvas",
                item.name,
                item.x,
                item.y,
                fw,
                fh,
                canvas.width,
                canvas.height
            );
        }

        if target != placed {
            state.resize_shape(id, fw, fh, item.x, item.y);
        }
    }

    if let Some(label) = room_type {
        state.set_room_type(label)?;
    }
    if let Some(label) = style {
        state.set_lighting_style(label)?;
    }
    Ok(state)
}
