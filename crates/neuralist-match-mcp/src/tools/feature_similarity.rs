//! Tool: feature_similarity — Cosine similarity between two feature vectors.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::registry::parse_args;

#[derive(Debug, Deserialize)]
struct SimilarityParams {
    a: Vec<f64>,
    b: Vec<f64>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "feature_similarity".to_string(),
        description: Some(
            "Cosine similarity between two equal-length feature vectors".to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "a": { "type": "array", "items": { "type": "number" } },
                "b": { "type": "array", "items": { "type": "number" } }
            },
            "required": ["a", "b"]
        }),
    }
}

pub fn execute(args: Value) -> McpResult<ToolCallResult> {
    let params: SimilarityParams = parse_args(args)?;
    let similarity = neuralist_match::checked_similarity(&params.a, &params.b)?;

    Ok(ToolCallResult::json(&json!({
        "similarity": similarity,
    })))
}
