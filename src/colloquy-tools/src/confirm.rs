//! The `request_user_confirmation` tool: present a summary of completed
//! work and wait for the user's acknowledgment.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use colloquy_dialog::{DialogParameters, NO_TIMEOUT, SessionManager};
use colloquy_mcp_server::ToolHandler;
use colloquy_mcp_types::{CallToolResult, PropertySchema, Tool, ToolInputSchema};

use crate::{REQUEST_USER_CONFIRMATION, outcome_text};

const DESCRIPTION: &str = "\
Show the user a summary of what was done and wait for their sign-off. The \
dialog stays open until the user responds; there is no timeout. Use this at \
the end of a task, before moving on to work the user has not seen.";

/// Confirmations never time out and get a taller free-text area for
/// follow-up remarks.
const CONFIRMATION_INPUT_HEIGHT: u32 = 300;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfirmArgs {
    project_name: String,
    summary: String,
}

/// Confirmation tool.
pub struct RequestConfirmationTool {
    sessions: Arc<SessionManager>,
}

impl RequestConfirmationTool {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self { sessions }
    }
}

#[async_trait::async_trait]
impl ToolHandler for RequestConfirmationTool {
    fn tool(&self) -> Tool {
        Tool::new(REQUEST_USER_CONFIRMATION, DESCRIPTION).with_schema(
            ToolInputSchema::object()
                .property(
                    "projectName",
                    PropertySchema::string()
                        .description("Project or task name shown in the dialog title"),
                )
                .property(
                    "summary",
                    PropertySchema::string()
                        .description("What was done, in the user's terms. Markdown is rendered."),
                )
                .required(vec!["projectName", "summary"]),
        )
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: ConfirmArgs = serde_json::from_value(arguments)
            .context("invalid request_user_confirmation arguments")?;

        debug!(project = %args.project_name, "request_user_confirmation invoked");

        let params = DialogParameters::new(args.project_name, args.summary)
            .with_timeout_secs(NO_TIMEOUT)
            .with_response_area_height(CONFIRMATION_INPUT_HEIGHT);

        let reply = self
            .sessions
            .start_session(params)
            .await
            .context("failed to open the confirmation dialog")?;
        let outcome = reply
            .outcome()
            .await
            .context("the confirmation dialog ended without an answer")?;

        Ok(CallToolResult::text(outcome_text(outcome)))
    }
}
