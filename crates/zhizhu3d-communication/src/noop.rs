//! Offline generation service.

use async_trait::async_trait;
use tracing::info;

use zhizhu3d_core::{GenerationError, GenerationRequest, GenerationResult, GenerationService};

/// Accepts every payload and returns an empty result without any I/O.
///
/// Used when no service endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpGenerationService;

#[async_trait]
impl GenerationService for NoOpGenerationService {
    fn name(&self) -> &str {
        "noop"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        info!(
            "No generation service configured, dropping {} payload",
            request.room_type
        );
        Ok(GenerationResult::default())
    }
}
