//! Tool: feature_best_match — Index of the candidate most similar to a query.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ServerConfig;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

use super::registry::{check_candidates, parse_args};

#[derive(Debug, Deserialize)]
struct BestMatchParams {
    query: Vec<f64>,
    candidates: Vec<Vec<f64>>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "feature_best_match".to_string(),
        description: Some(
            "Find the single most similar candidate; candidates of a different length are skipped"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": { "type": "array", "items": { "type": "number" } },
                "candidates": {
                    "type": "array",
                    "items": { "type": "array", "items": { "type": "number" } },
                    "description": "Reference vectors; result indices refer to positions here"
                }
            },
            "required": ["query", "candidates"]
        }),
    }
}

pub fn execute(args: Value, config: &ServerConfig) -> McpResult<ToolCallResult> {
    let params: BestMatchParams = parse_args(args)?;
    check_candidates(params.candidates.len(), config)?;

    let best = neuralist_match::find_best_match(&params.query, &params.candidates);
    let score = best
        .map(|index| neuralist_match::cosine_similarity(&params.query, &params.candidates[index]));
    let comparable = params
        .candidates
        .iter()
        .filter(|c| !params.query.is_empty() && c.len() == params.query.len())
        .count();

    Ok(ToolCallResult::json(&json!({
        "index": best,
        "score": score,
        "compared": comparable,
        "skipped": params.candidates.len() - comparable,
    })))
}
