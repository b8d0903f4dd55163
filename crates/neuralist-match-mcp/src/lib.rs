//! Neuralist Match MCP Server — LLM access to histogram feature extraction and matching.

pub mod config;
pub mod protocol;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::ServerConfig;
pub use protocol::ProtocolHandler;
pub use transport::StdioTransport;
