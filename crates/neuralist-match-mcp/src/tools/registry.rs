//! Tool registration and dispatch.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ServerConfig;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{engine_info, feature_best_match, feature_extract, feature_similarity, feature_top_k};

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![
            feature_extract::definition(),
            feature_similarity::definition(),
            feature_best_match::definition(),
            feature_top_k::definition(),
            engine_info::definition(),
        ]
    }

    pub fn call(
        name: &str,
        arguments: Option<Value>,
        config: &ServerConfig,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        tracing::debug!("Calling tool {name}");

        match name {
            "feature_extract" => feature_extract::execute(args, config),
            "feature_similarity" => feature_similarity::execute(args),
            "feature_best_match" => feature_best_match::execute(args, config),
            "feature_top_k" => feature_top_k::execute(args, config),
            "engine_info" => engine_info::execute(config),
            _ => Err(McpError::ToolNotFound(name.to_string())),
        }
    }
}

/// Deserialize tool arguments, mapping failures to `InvalidParams`.
pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> McpResult<T> {
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// Reject candidate collections larger than the configured limit.
pub(crate) fn check_candidates(count: usize, config: &ServerConfig) -> McpResult<()> {
    if count > config.max_candidates {
        return Err(McpError::ContentTooLarge {
            size: count,
            max: config.max_candidates,
            unit: "candidates",
        });
    }
    Ok(())
}
