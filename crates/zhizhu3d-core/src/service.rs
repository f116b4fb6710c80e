//! Generation service interface
//!
//! Defines the seam between the designer and the external workflow service
//! that turns a serialized scene into a lighting layout.

use async_trait::async_trait;

use crate::data::generation::{GenerationRequest, GenerationResult};
use crate::error::GenerationError;

/// A backend able to turn a scene payload into a lighting layout.
///
/// One call issues one request and resolves to one response or failure.
/// Implementations do not retry.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Human readable backend name, used in logs
    fn name(&self) -> &str;

    /// Submit a payload and wait for the result
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError>;
}
