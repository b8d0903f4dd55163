//! Tool: feature_extract — Compute a color-histogram feature vector from raw pixels.

use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ServerConfig;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::registry::parse_args;

#[derive(Debug, Deserialize)]
struct ExtractParams {
    /// Base64-encoded interleaved pixel bytes.
    data: String,
    width: u32,
    height: u32,
    #[serde(default = "default_channels")]
    channels: u32,
}

fn default_channels() -> u32 {
    3
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "feature_extract".to_string(),
        description: Some(
            "Extract a normalized per-channel color histogram (256 bins per channel) from raw pixels"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "data": {
                    "type": "string",
                    "description": "Base64 of raw interleaved 8-bit pixels (not an encoded image file)"
                },
                "width": { "type": "integer", "minimum": 0 },
                "height": { "type": "integer", "minimum": 0 },
                "channels": { "type": "integer", "minimum": 1, "default": 3 }
            },
            "required": ["data", "width", "height"]
        }),
    }
}

pub fn execute(args: Value, config: &ServerConfig) -> McpResult<ToolCallResult> {
    let params: ExtractParams = parse_args(args)?;

    // Base64 expands 3 bytes into 4 characters
    let decoded_estimate = params.data.len() / 4 * 3;
    if decoded_estimate > config.max_image_bytes {
        return Err(McpError::ContentTooLarge {
            size: decoded_estimate,
            max: config.max_image_bytes,
            unit: "bytes",
        });
    }

    let pixels = base64::engine::general_purpose::STANDARD
        .decode(params.data.trim())
        .map_err(|e| McpError::InvalidParams(format!("Invalid base64: {e}")))?;

    let features = neuralist_match::extract_color_histogram(
        &pixels,
        params.width,
        params.height,
        params.channels,
    )?;

    Ok(ToolCallResult::json(&json!({
        "feature_len": features.len(),
        "channels": params.channels,
        "pixel_count": params.width as u64 * params.height as u64,
        "features": features,
    })))
}
