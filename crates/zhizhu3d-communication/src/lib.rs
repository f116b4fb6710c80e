//! # ZHIZHU3D Communication
//!
//! Client side of the lighting-layout generation service.
//! Sends scene payloads to the workflow HTTP API and turns its loosely
//! shaped responses into [`GenerationResult`](zhizhu3d_core::GenerationResult)s.

pub mod client;
pub mod noop;
pub mod response;

pub use client::{ClientConfig, HttpGenerationClient};
pub use noop::NoOpGenerationService;
pub use response::{decode_image_data, parse_response};
