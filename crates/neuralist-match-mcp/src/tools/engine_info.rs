//! Tool: engine_info — Report engine version and request limits.

use serde_json::json;

use crate::config::ServerConfig;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "engine_info".to_string(),
        description: Some(
            "Report the matching engine version, feature layout, and limits".to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

pub fn execute(config: &ServerConfig) -> McpResult<ToolCallResult> {
    Ok(ToolCallResult::json(&json!({
        "version": neuralist_match::VERSION,
        "histogram_bins": neuralist_match::HISTOGRAM_BINS,
        "metric": "cosine",
        "limits": config,
    })))
}
