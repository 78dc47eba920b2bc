//! Colloquy MCP Types - the protocol subset spoken by the dialog bridge.
//!
//! Type definitions for the Model Context Protocol as used by a tools-only
//! stdio server: the JSON-RPC 2.0 envelope, the initialize handshake, and
//! tool definitions with their call parameters and results.
//!
//! # Example
//! ```rust
//! use colloquy_mcp_types::{PropertySchema, Tool, ToolInputSchema};
//!
//! let tool = Tool::new("ask_user", "Ask the user a question")
//!     .with_schema(
//!         ToolInputSchema::object()
//!             .property("message", PropertySchema::string().description("Question text"))
//!             .required(vec!["message"]),
//!     );
//! ```

mod jsonrpc;
mod protocol;
mod tools;

pub use jsonrpc::{
    JSONRPC_VERSION, JsonRpcError, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, RequestId,
};

pub use protocol::{
    Implementation, InitializeParams, InitializeResult, PROTOCOL_VERSION, ServerCapabilities,
    ToolsCapability, methods,
};

pub use tools::{
    CallToolParams, CallToolResult, Content, ListToolsResult, PropertySchema, Tool, ToolInputSchema,
};
