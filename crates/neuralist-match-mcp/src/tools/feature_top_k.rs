//! Tool: feature_top_k — Rank candidates by similarity to a query.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ServerConfig;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::registry::{check_candidates, parse_args};

#[derive(Debug, Deserialize)]
struct TopKParams {
    query: Vec<f64>,
    candidates: Vec<Vec<f64>>,
    #[serde(default = "default_k")]
    k: usize,
    #[serde(default)]
    min_score: Option<f64>,
}

fn default_k() -> usize {
    5
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "feature_top_k".to_string(),
        description: Some(
            "Return the k most similar candidates with scores, highest first".to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": { "type": "array", "items": { "type": "number" } },
                "candidates": {
                    "type": "array",
                    "items": { "type": "array", "items": { "type": "number" } },
                    "description": "Reference vectors; result indices refer to positions here"
                },
                "k": { "type": "integer", "minimum": 0, "default": 5 },
                "min_score": { "type": "number", "description": "Drop candidates scoring below this" }
            },
            "required": ["query", "candidates"]
        }),
    }
}

pub fn execute(args: Value, config: &ServerConfig) -> McpResult<ToolCallResult> {
    let params: TopKParams = parse_args(args)?;
    check_candidates(params.candidates.len(), config)?;

    if params.k > config.max_top_k {
        return Err(McpError::InvalidParams(format!(
            "k = {} exceeds the limit of {}",
            params.k, config.max_top_k
        )));
    }

    let matches = match params.min_score {
        Some(min) => {
            neuralist_match::find_top_k_above(&params.query, &params.candidates, params.k, min)
        }
        None => neuralist_match::find_top_k(&params.query, &params.candidates, params.k),
    };

    Ok(ToolCallResult::json(&json!({
        "total": matches.len(),
        "matches": matches,
    })))
}
