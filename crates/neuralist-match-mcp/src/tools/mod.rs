//! MCP tool implementations.

pub mod engine_info;
pub mod feature_best_match;
pub mod feature_extract;
pub mod feature_similarity;
pub mod feature_top_k;
pub mod registry;

pub use registry::ToolRegistry;
