//! # ZHIZHU3D Core
//!
//! Core types and utilities for the ZHIZHU3D layout designer.
//! Provides the error taxonomy, editor geometry, unit conversion and the
//! catalogs (furniture presets, room types, lighting styles) shared by the
//! designer, settings and service-client crates.

pub mod constants;
pub mod data;
pub mod error;
pub mod service;
pub mod units;

pub use data::{
    catalog::Catalog,
    generation::{GenerationRequest, GenerationResult, Lighting2D},
    presets::{FurniturePreset, PresetLibrary},
    Point, Rect,
};

pub use error::{Error, GenerationError, Result, SceneError};

pub use service::GenerationService;

pub use units::{format_dimension, px_to_mm, to_wire_int, EDITOR_SCALE};
