//! Error types and JSON-RPC error codes for the MCP server.

use neuralist_match::MatchError;

use super::message::{JsonRpcError, RequestId};

/// Standard JSON-RPC 2.0 error codes.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// MCP-specific error codes.
pub mod mcp_error_codes {
    pub const CONTENT_TOO_LARGE: i32 = -32801;
    pub const TOOL_NOT_FOUND: i32 = -32803;
    /// The matching engine rejected its input.
    pub const MATCH_ERROR: i32 = -32852;
}

/// All errors that can occur in the MCP server.
#[derive(thiserror::Error, Debug)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Content too large: {size} {unit} exceeds {max}")]
    ContentTooLarge {
        size: usize,
        max: usize,
        unit: &'static str,
    },

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Match error: {0}")]
    MatchFailed(#[from] MatchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    pub fn code(&self) -> i32 {
        use error_codes::*;
        use mcp_error_codes::*;
        match self {
            McpError::ParseError(_) => PARSE_ERROR,
            McpError::InvalidRequest(_) => INVALID_REQUEST,
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::InvalidParams(_) => INVALID_PARAMS,
            McpError::InternalError(_) | McpError::Io(_) => INTERNAL_ERROR,
            McpError::ContentTooLarge { .. } => CONTENT_TOO_LARGE,
            McpError::ToolNotFound(_) => TOOL_NOT_FOUND,
            McpError::MatchFailed(_) => MATCH_ERROR,
            McpError::Json(_) => PARSE_ERROR,
        }
    }

    pub fn to_json_rpc_error(&self, id: RequestId) -> JsonRpcError {
        JsonRpcError::new(id, self.code(), self.to_string())
    }
}

pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_error_code() {
        let err: McpError = MatchError::InvalidInput("empty".to_string()).into();
        assert_eq!(err.code(), mcp_error_codes::MATCH_ERROR);
        assert_eq!(err.to_string(), "Match error: Invalid input: empty");
    }

    #[test]
    fn test_content_too_large_message() {
        let err = McpError::ContentTooLarge {
            size: 12,
            max: 10,
            unit: "candidates",
        };
        assert_eq!(err.code(), -32801);
        assert_eq!(err.to_string(), "Content too large: 12 candidates exceeds 10");
    }

    #[test]
    fn test_error_envelope() {
        let err = McpError::ToolNotFound("nope".to_string());
        let envelope = err.to_json_rpc_error(RequestId::Number(7));
        assert_eq!(envelope.id, RequestId::Number(7));
        assert_eq!(envelope.error.code, -32803);
        assert!(envelope.error.data.is_none());
    }
}
