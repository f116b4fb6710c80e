//! Wire types exchanged with the lighting-layout generation service.

use serde::{Deserialize, Serialize};

/// Request payload built from the editor scene.
///
/// Field names are fixed by the service: `contour`, `furnitures`, `style`, `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Closed room polygon, e.g. `[(0,0),(1000,0),(1000,800),(0,800),(0,0)]`
    pub contour: String,
    /// `<name>:[(x,y),...],` per furniture item; empty when there is none
    pub furnitures: String,
    /// Lighting-style label
    pub style: String,
    /// Room-type label
    #[serde(rename = "type")]
    pub room_type: String,
}

/// Generated 2D lighting plan image reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lighting2D {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Base64 image payload as sent by the service (may carry a `data:` prefix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

impl Lighting2D {
    pub fn is_empty(&self) -> bool {
        self.download_url.is_none() && self.image_data.is_none()
    }
}

/// Parsed service response. Every field is optional: anything missing or
/// malformed in the response is simply absent here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(rename = "lighting2D", default, skip_serializing_if = "Option::is_none")]
    pub lighting_2d: Option<Lighting2D>,
    /// Design intent text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Computed light positions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl GenerationResult {
    /// First available free-text field, in `content`, `output`, `location` order.
    pub fn description(&self) -> Option<&str> {
        self.content
            .as_deref()
            .or(self.output.as_deref())
            .or(self.location.as_deref())
    }

    pub fn download_url(&self) -> Option<&str> {
        self.lighting_2d.as_ref()?.download_url.as_deref()
    }

    pub fn image_data(&self) -> Option<&str> {
        self.lighting_2d.as_ref()?.image_data.as_deref()
    }

    pub fn has_image(&self) -> bool {
        self.download_url().is_some() || self.image_data().is_some()
    }

    /// True when the response carried nothing usable.
    pub fn is_empty(&self) -> bool {
        !self.has_image() && self.description().is_none()
    }
}
