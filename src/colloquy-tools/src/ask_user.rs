//! The `ask_user` tool: pose an open-ended question, optionally with canned
//! answers.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use colloquy_dialog::{DialogParameters, SessionManager};
use colloquy_mcp_server::ToolHandler;
use colloquy_mcp_types::{CallToolResult, PropertySchema, Tool, ToolInputSchema};

use crate::{ASK_USER, outcome_text};

const DESCRIPTION: &str = "\
Ask the user a question and wait for their answer. A dialog window opens on \
the user's machine; the call returns once they reply, dismiss it, or the \
timeout elapses. Offer predefinedOptions when a small set of answers covers \
the decision; the user can always type a free-form reply instead.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AskUserArgs {
    project_name: String,
    message: String,
    #[serde(default)]
    predefined_options: Option<Vec<String>>,
}

/// Open-ended question tool. Carries the CLI-selected default timeout.
pub struct AskUserTool {
    sessions: Arc<SessionManager>,
    default_timeout_secs: u64,
}

impl AskUserTool {
    pub fn new(sessions: Arc<SessionManager>, default_timeout_secs: u64) -> Self {
        Self {
            sessions,
            default_timeout_secs,
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for AskUserTool {
    fn tool(&self) -> Tool {
        Tool::new(ASK_USER, DESCRIPTION).with_schema(
            ToolInputSchema::object()
                .property(
                    "projectName",
                    PropertySchema::string()
                        .description("Project or task name shown in the dialog title"),
                )
                .property(
                    "message",
                    PropertySchema::string()
                        .description("The question to present. Markdown is rendered."),
                )
                .property(
                    "predefinedOptions",
                    PropertySchema::array(PropertySchema::string())
                        .description("Canned answers offered as one-click choices"),
                )
                .required(vec!["projectName", "message"]),
        )
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: AskUserArgs =
            serde_json::from_value(arguments).context("invalid ask_user arguments")?;

        debug!(project = %args.project_name, "ask_user invoked");

        let params = DialogParameters::new(args.project_name, args.message)
            .with_options(args.predefined_options.unwrap_or_default())
            .with_timeout_secs(self.default_timeout_secs);

        let reply = self
            .sessions
            .start_session(params)
            .await
            .context("failed to open the user dialog")?;
        let outcome = reply
            .outcome()
            .await
            .context("the user dialog ended without an answer")?;

        Ok(CallToolResult::text(outcome_text(outcome)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tokio::sync::Mutex;
    use tokio::sync::mpsc::UnboundedSender;
    use tokio::time::sleep;

    use colloquy_dialog::{PresentationSurface, SurfaceError, TerminalEvent};

    use super::*;

    #[derive(Default)]
    pub(crate) struct FakeSurface {
        pub(crate) spawns: Mutex<Vec<(DialogParameters, UnboundedSender<TerminalEvent>)>>,
    }

    #[async_trait::async_trait]
    impl PresentationSurface for FakeSurface {
        async fn spawn(
            &self,
            params: &DialogParameters,
            events: UnboundedSender<TerminalEvent>,
        ) -> Result<(), SurfaceError> {
            self.spawns.lock().await.push((params.clone(), events));
            Ok(())
        }

        async fn terminate(&self) {}
    }

    pub(crate) fn harness() -> (Arc<FakeSurface>, Arc<SessionManager>) {
        let surface = Arc::new(FakeSurface::default());
        let sessions = Arc::new(SessionManager::new(surface.clone()));
        (surface, sessions)
    }

    /// Wait for the tool's session to reach the surface, then play the
    /// user's part.
    pub(crate) async fn respond(surface: &FakeSurface, line: TerminalEvent) -> DialogParameters {
        for _ in 0..100 {
            if !surface.spawns.lock().await.is_empty() {
                break;
            }
            sleep(Duration::from_millis(5)).await;
        }
        let spawns = surface.spawns.lock().await;
        let (params, events) = spawns.last().expect("no dialog spawned");
        events.send(line).expect("send event");
        params.clone()
    }

    #[tokio::test]
    async fn replies_with_the_selected_option() {
        let (surface, sessions) = harness();
        let tool = AskUserTool::new(sessions, 60);

        let call = tokio::spawn(async move {
            tool.execute(serde_json::json!({
                "projectName": "proj",
                "message": "Pick one",
                "predefinedOptions": ["a", "b"]
            }))
            .await
        });

        let params = respond(&surface, TerminalEvent::TextReply("a".to_string())).await;
        assert_eq!(params.options, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(params.timeout_secs, 60);
        assert_eq!(params.response_area_height, None);

        let result = call.await.expect("join").expect("execute");
        assert!(!result.is_error());
        assert_eq!(result.content[0].as_text(), Some("a"));
    }

    #[tokio::test]
    async fn timeout_produces_a_retry_prompt() {
        let (surface, sessions) = harness();
        let tool = AskUserTool::new(sessions, 60);

        let call = tokio::spawn(async move {
            tool.execute(serde_json::json!({
                "projectName": "proj",
                "message": "Anything?"
            }))
            .await
        });

        let params = respond(&surface, TerminalEvent::TimedOut).await;
        assert_eq!(params.options, Vec::<String>::new());
        assert_eq!(params.timeout_secs, 60);

        let result = call.await.expect("join").expect("execute");
        assert!(
            result.content[0]
                .as_text()
                .expect("text")
                .contains("Ask again")
        );
    }

    #[tokio::test]
    async fn missing_message_fails_before_any_spawn() {
        let (surface, sessions) = harness();
        let tool = AskUserTool::new(sessions, 60);

        let err = tool
            .execute(serde_json::json!({ "projectName": "proj" }))
            .await
            .expect_err("validation must fail");

        assert!(err.to_string().contains("invalid ask_user arguments"));
        assert!(surface.spawns.lock().await.is_empty());
    }

    #[tokio::test]
    async fn missing_project_name_fails_before_any_spawn() {
        let (surface, sessions) = harness();
        let tool = AskUserTool::new(sessions, 60);

        let err = tool
            .execute(serde_json::json!({ "message": "hi" }))
            .await
            .expect_err("validation must fail");

        assert!(err.to_string().contains("invalid ask_user arguments"));
        assert!(surface.spawns.lock().await.is_empty());
    }
}
