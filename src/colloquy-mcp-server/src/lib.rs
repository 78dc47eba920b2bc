//! Colloquy MCP Server - stdio Model Context Protocol scaffolding.
//!
//! A tools-only MCP server: register [`ToolHandler`]s through the builder,
//! then drive the line-delimited JSON-RPC loop over stdio. Dispatch covers
//! `initialize`, `notifications/initialized`, `ping`, `tools/list`, and
//! `tools/call`; anything else is answered with a method-not-found error.
//!
//! # Example
//! ```rust,no_run
//! use colloquy_mcp_server::McpServerBuilder;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServerBuilder::new("my-server", "1.0.0").build()?;
//!     server.run_stdio().await
//! }
//! ```

mod handlers;
mod server;

pub use handlers::{FnToolHandler, ToolHandler};
pub use server::{McpServer, McpServerBuilder, ServerState};

pub use colloquy_mcp_types;
