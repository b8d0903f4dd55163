//! MCP protocol handling — request validation, handshake, and dispatch.

pub mod handler;
pub mod negotiation;
pub mod validator;

pub use handler::ProtocolHandler;
