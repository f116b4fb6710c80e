//! Payload building and the generation call for designer state.

use super::DesignerState;
use crate::serializer::serialize_scene;
use zhizhu3d_core::{Error, GenerationRequest, GenerationResult, GenerationService, SceneError};

impl DesignerState {
    /// Validates the current selections and room, then serializes the scene.
    ///
    /// Checks, in order: a room exists, both sides reach `min_room_side`,
    /// the room type and lighting style are in the catalog.
    pub fn build_payload(&self) -> Result<GenerationRequest, SceneError> {
        let room = self.canvas.room().ok_or(SceneError::MissingRoom)?;
        if room.width < self.min_room_side || room.height < self.min_room_side {
            return Err(SceneError::DegenerateRoom {
                width: room.width,
                height: room.height,
                min_side: self.min_room_side,
            });
        }
        self.catalog.check_room_type(&self.room_type)?;
        self.catalog.check_lighting_style(&self.lighting_style)?;

        let outside = self.canvas.scene().furniture_outside_room();
        if !outside.is_empty() {
            tracing::debug!("{} furniture item(s) extend past the room", outside.len());
        }

        serialize_scene(
            self.canvas.scene(),
            &self.lighting_style,
            &self.room_type,
            self.scale,
        )
    }

    /// Builds the payload and submits it to `service`.
    ///
    /// On success the result is stored as `last_result`. On failure nothing
    /// changes, so the same call can simply be retried.
    pub async fn generate(
        &mut self,
        service: &dyn GenerationService,
    ) -> Result<GenerationResult, Error> {
        let request = self.build_payload()?;
        tracing::info!(
            "Submitting {} / {} layout to {}",
            request.room_type,
            request.style,
            service.name()
        );
        let result = service.generate(&request).await?;
        if result.is_empty() {
            tracing::warn!("Generation service returned no usable fields");
        }
        self.last_result = Some(result.clone());
        Ok(result)
    }
}
