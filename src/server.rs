//! Stdio JSON-RPC server.
//!
//! Newline-delimited JSON-RPC 2.0 over stdin/stdout. stdout carries only
//! protocol frames; all logging goes to stderr and the log file. The server
//! is stateless per call: each `tools/list` triggers a fresh discovery and
//! each `tools/call` a fresh load.

use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use skillhub_protocols::mcp::{McpError, McpRequest, McpResponse, RequestId};

use crate::adapter::SkillToolAdapter;

/// MCP protocol revision implemented by this server.
const PROTOCOL_VERSION: &str = "2024-11-05";

pub struct McpServer {
    adapter: SkillToolAdapter,
}

impl McpServer {
    pub fn new(adapter: SkillToolAdapter) -> Self {
        Self { adapter }
    }

    /// Serve requests from stdin until EOF.
    pub async fn run(&self) -> std::io::Result<()> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(stdin).lines();

        info!("Serving skills over stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let response = match self.handle_line(&line).await {
                Some(r) => r,
                None => continue,
            };

            let frame = serde_json::to_string(&response).map_err(std::io::Error::other)?;
            stdout.write_all(frame.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Parse and dispatch one frame. Returns `None` for notifications.
    async fn handle_line(&self, line: &str) -> Option<McpResponse> {
        let request: McpRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!("Failed to parse request: {}", e);
                return Some(McpResponse::error(RequestId::Null, McpError::parse_error()));
            }
        };

        let id = match request.id.clone() {
            Some(id) => id,
            None => {
                debug!("Ignoring notification: {}", request.method);
                return None;
            }
        };

        Some(self.dispatch(id, &request).await)
    }

    /// Route one request to its handler.
    async fn dispatch(&self, id: RequestId, request: &McpRequest) -> McpResponse {
        match request.method.as_str() {
            "initialize" => McpResponse::success(id, self.initialize_result()),
            "ping" => McpResponse::success(id, json!({})),
            "tools/list" => {
                let tools = self.adapter.list_tools().await;
                McpResponse::success(id, json!({ "tools": tools }))
            }
            "tools/call" => {
                let params = request.params.clone().unwrap_or_else(|| json!({}));
                let tool = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
                let arguments = params
                    .get("arguments")
                    .cloned()
                    .unwrap_or_else(|| json!({}));

                let result = self.adapter.call_tool(tool, &arguments).await;
                match serde_json::to_value(&result) {
                    Ok(value) => McpResponse::success(id, value),
                    Err(e) => McpResponse::error(
                        id,
                        McpError::new(-32603, format!("Failed to encode result: {}", e)),
                    ),
                }
            }
            other => {
                debug!("Unknown method: {}", other);
                McpResponse::error(id, McpError::method_not_found())
            }
        }
    }

    fn initialize_result(&self) -> serde_json::Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            }
        })
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
