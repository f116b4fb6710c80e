//! Generation service response parser
//!
//! Workflow services wrap their outputs differently depending on how they
//! are deployed. The parser looks for the known fields at the top level,
//! under `data`, under `data.outputs` and under `outputs`, taking the first
//! match for each field. Anything missing or malformed is left as `None`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use tracing::warn;

use zhizhu3d_core::{GenerationError, GenerationResult, Lighting2D};

const LIGHTING_KEY: &str = "lighting2D";

/// Containers searched for result fields, outermost first.
fn candidates(body: &Value) -> Vec<&Value> {
    let mut out = vec![body];
    if let Some(data) = body.get("data") {
        out.push(data);
        if let Some(outputs) = data.get("outputs") {
            out.push(outputs);
        }
    }
    if let Some(outputs) = body.get("outputs") {
        out.push(outputs);
    }
    out.retain(|v| v.is_object());
    out
}

fn find<'a>(containers: &[&'a Value], key: &str) -> Option<&'a Value> {
    containers
        .iter()
        .filter_map(|c| c.get(key))
        .find(|v| !v.is_null())
}

/// Text field: strings as-is, structured values as compact JSON.
fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn string_member(obj: &Value, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// `lighting2D` may arrive as an object or as a JSON-encoded string.
fn lighting_field(value: Option<&Value>) -> Option<Lighting2D> {
    let value = value?;
    let parsed;
    let obj = match value {
        Value::Object(_) => value,
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(v) if v.is_object() => {
                parsed = v;
                &parsed
            }
            _ => {
                warn!("Ignoring unparseable {} string", LIGHTING_KEY);
                return None;
            }
        },
        _ => {
            warn!("Ignoring {} of unexpected type", LIGHTING_KEY);
            return None;
        }
    };

    let lighting = Lighting2D {
        download_url: string_member(obj, "download_url"),
        image_data: string_member(obj, "image_data"),
    };
    if lighting.is_empty() {
        None
    } else {
        Some(lighting)
    }
}

/// Extract a [`GenerationResult`] from a decoded response body.
pub fn parse_response(body: &Value) -> GenerationResult {
    let containers = candidates(body);
    let result = GenerationResult {
        lighting_2d: lighting_field(find(&containers, LIGHTING_KEY)),
        content: text_field(find(&containers, "content")),
        output: text_field(find(&containers, "output")),
        location: text_field(find(&containers, "location")),
    };
    if result.is_empty() {
        warn!("Response carried no lighting plan or description");
    }
    result
}

/// Decode base64 image data, with or without a `data:<mime>;base64,` prefix.
pub fn decode_image_data(data: &str) -> Result<Vec<u8>, GenerationError> {
    let payload = match data.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(',')
            .map(|(_, b64)| b64)
            .ok_or_else(|| GenerationError::InvalidResponse {
                reason: "data URL without payload".to_string(),
            })?,
        None => data,
    };
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| GenerationError::InvalidResponse {
            reason: format!("invalid image data: {}", e),
        })
}
