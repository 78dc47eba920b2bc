//! Stdio MCP server: tool registry, dispatch, and the read loop.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use colloquy_mcp_types::{
    CallToolParams, CallToolResult, Implementation, InitializeParams, InitializeResult,
    JsonRpcError, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, ListToolsResult, RequestId,
    ServerCapabilities, Tool, methods,
};

use crate::handlers::ToolHandler;

/// Server lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Uninitialized,
    Initializing,
    Ready,
    ShuttingDown,
    Stopped,
}

/// MCP server with a fixed tool registry, speaking line-delimited JSON-RPC
/// over stdio. All diagnostics go to tracing; stdout carries only protocol
/// frames.
pub struct McpServer {
    info: Implementation,
    capabilities: ServerCapabilities,
    instructions: Option<String>,
    tools: RwLock<HashMap<String, Arc<dyn ToolHandler>>>,
    state: RwLock<ServerState>,
    running: AtomicBool,
}

impl McpServer {
    pub fn info(&self) -> &Implementation {
        &self.info
    }

    pub fn capabilities(&self) -> &ServerCapabilities {
        &self.capabilities
    }

    pub async fn state(&self) -> ServerState {
        *self.state.read().await
    }

    pub async fn tools(&self) -> Vec<Tool> {
        self.tools.read().await.values().map(|h| h.tool()).collect()
    }

    /// Handle a single JSON-RPC request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        debug!(method = %request.method, id = %request.id, "handling request");

        let result = match request.method.as_str() {
            methods::INITIALIZE => self.handle_initialize(request.params).await,
            methods::PING => Ok(json!({})),
            methods::TOOLS_LIST => self.handle_list_tools().await,
            methods::TOOLS_CALL => self.handle_call_tool(request.params).await,
            _ => Err(JsonRpcError::method_not_found(&request.method)),
        };

        match result {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(error) => JsonRpcResponse::error(request.id, error),
        }
    }

    /// Handle a JSON-RPC notification.
    pub async fn handle_notification(&self, notification: JsonRpcNotification) {
        debug!(method = %notification.method, "handling notification");

        match notification.method.as_str() {
            methods::INITIALIZED => {
                *self.state.write().await = ServerState::Ready;
                info!("server initialized and ready");
            }
            _ => {
                warn!(method = %notification.method, "unknown notification");
            }
        }
    }

    async fn handle_initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        // Check and transition under one write lock; two racing initialize
        // requests must not both pass the uninitialized check.
        {
            let mut state = self.state.write().await;
            if *state != ServerState::Uninitialized {
                return Err(JsonRpcError::invalid_request("Server already initialized"));
            }
            *state = ServerState::Initializing;
        }

        let init_params: InitializeParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?
            .unwrap_or_default();

        info!(
            client = %init_params.client_info.name,
            version = %init_params.client_info.version,
            protocol = %init_params.protocol_version,
            "client connected"
        );

        let mut result = InitializeResult::new(self.info.clone(), self.capabilities.clone());
        if let Some(ref instructions) = self.instructions {
            result = result.with_instructions(instructions.clone());
        }

        serde_json::to_value(result).map_err(|e| JsonRpcError::internal_error(e.to_string()))
    }

    async fn handle_list_tools(&self) -> Result<Value, JsonRpcError> {
        let result = ListToolsResult::new(self.tools().await);
        serde_json::to_value(result).map_err(|e| JsonRpcError::internal_error(e.to_string()))
    }

    async fn handle_call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let call_params: CallToolParams = serde_json::from_value(
            params.ok_or_else(|| JsonRpcError::invalid_params("Missing params"))?,
        )
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {e}")))?;

        debug!(tool = %call_params.name, "calling tool");

        let handler = self
            .tools
            .read()
            .await
            .get(&call_params.name)
            .cloned()
            .ok_or_else(|| {
                JsonRpcError::invalid_params(format!("Unknown tool: {}", call_params.name))
            })?;

        let arguments = call_params.arguments.unwrap_or(json!({}));
        let result = match handler.execute(arguments).await {
            Ok(call_result) => call_result,
            Err(e) => {
                warn!(tool = %call_params.name, error = %e, "tool execution failed");
                CallToolResult::error(format!("{e:#}"))
            }
        };

        serde_json::to_value(result).map_err(|e| JsonRpcError::internal_error(e.to_string()))
    }

    /// Run the server on stdio until EOF or `stop`.
    pub async fn run_stdio(self: Arc<Self>) -> Result<()> {
        info!(server = %self.info.name, "starting MCP server on stdio");
        self.running.store(true, Ordering::SeqCst);

        let mut reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut line = String::new();

        while self.running.load(Ordering::SeqCst) {
            line.clear();
            match reader.read_line(&mut line).await {
                Ok(0) => {
                    debug!("stdin closed, shutting down");
                    break;
                }
                Ok(_) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    if let Ok(request) = serde_json::from_str::<JsonRpcRequest>(trimmed) {
                        let response = self.handle_request(request).await;
                        write_frame(&mut stdout, &response).await?;
                    } else if let Ok(notification) =
                        serde_json::from_str::<JsonRpcNotification>(trimmed)
                    {
                        self.handle_notification(notification).await;
                    } else {
                        warn!(line = %trimmed, "invalid JSON-RPC message");
                        let response = JsonRpcResponse::error(
                            RequestId::Number(0),
                            JsonRpcError::parse_error("Invalid JSON"),
                        );
                        write_frame(&mut stdout, &response).await?;
                    }
                }
                Err(e) => {
                    error!(error = %e, "error reading from stdin");
                    break;
                }
            }
        }

        *self.state.write().await = ServerState::Stopped;
        self.running.store(false, Ordering::SeqCst);
        info!("MCP server stopped");

        Ok(())
    }

    /// Stop the server; the stdio loop exits on its next iteration.
    pub async fn stop(&self) {
        info!("stopping MCP server");
        *self.state.write().await = ServerState::ShuttingDown;
        self.running.store(false, Ordering::SeqCst);
    }
}

async fn write_frame(stdout: &mut tokio::io::Stdout, response: &JsonRpcResponse) -> Result<()> {
    let frame = serde_json::to_string(response).context("failed to serialize response")?;
    stdout
        .write_all(frame.as_bytes())
        .await
        .context("failed to write response")?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

/// Builder for [`McpServer`].
pub struct McpServerBuilder {
    name: String,
    version: String,
    instructions: Option<String>,
    tools: Vec<Arc<dyn ToolHandler>>,
}

impl McpServerBuilder {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            instructions: None,
            tools: Vec::new(),
        }
    }

    /// Add a tool handler.
    pub fn tool_handler(mut self, handler: Arc<dyn ToolHandler>) -> Self {
        self.tools.push(handler);
        self
    }

    /// Set instructions returned to clients at initialize time.
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Build the server. Tools are registered before this returns.
    pub fn build(self) -> Result<Arc<McpServer>> {
        let mut tools: HashMap<String, Arc<dyn ToolHandler>> = HashMap::new();
        for handler in self.tools {
            let name = handler.tool().name;
            debug!(tool = %name, "registered tool");
            if tools.insert(name.clone(), handler).is_some() {
                anyhow::bail!("duplicate tool registration: {name}");
            }
        }

        Ok(Arc::new(McpServer {
            info: Implementation::new(self.name, self.version),
            capabilities: ServerCapabilities::default().with_tools(),
            instructions: self.instructions,
            tools: RwLock::new(tools),
            state: RwLock::new(ServerState::Uninitialized),
            running: AtomicBool::new(false),
        }))
    }
}
