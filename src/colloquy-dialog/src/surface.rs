//! Presentation process adapter: owns the external dialog process and turns
//! its stdout into classified events.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::error::SurfaceError;
use crate::event::{TerminalEvent, classify_line};
use crate::params::DialogParameters;

/// Environment names of the parameter handoff. The surface reads these at
/// startup; nothing is passed positionally.
pub const ENV_CONTEXT_LABEL: &str = "COLLOQUY_CONTEXT_LABEL";
pub const ENV_PROMPT: &str = "COLLOQUY_PROMPT";
pub const ENV_OPTIONS: &str = "COLLOQUY_OPTIONS";
pub const ENV_TIMEOUT_SECS: &str = "COLLOQUY_TIMEOUT_SECS";
pub const ENV_INPUT_HEIGHT: &str = "COLLOQUY_INPUT_HEIGHT";

/// Host markers stripped from the inherited environment. IDE hosts leak
/// these into MCP server processes; a surface inheriting them starts in the
/// host's runtime mode instead of as a standalone application.
const SCRUBBED_HOST_VARS: &[&str] = &[
    "ELECTRON_RUN_AS_NODE",
    "VSCODE_PID",
    "VSCODE_CWD",
    "VSCODE_IPC_HOOK",
    "TERM_PROGRAM",
];

/// A presentation surface: something that can show one dialog at a time and
/// report terminal events back. The production implementation spawns an
/// external process; tests substitute an in-memory fake.
#[async_trait]
pub trait PresentationSurface: Send + Sync {
    /// Show a dialog. Any dialog already showing is torn down first.
    /// Terminal events are delivered on `events` in stream order.
    async fn spawn(
        &self,
        params: &DialogParameters,
        events: UnboundedSender<TerminalEvent>,
    ) -> Result<(), SurfaceError>;

    /// Tear down the current dialog, if any.
    async fn terminate(&self);
}

/// The external dialog process. Holds at most one live child; spawning
/// always kills and replaces the previous one.
pub struct DialogProcess {
    program: String,
    child: Mutex<Option<Child>>,
}

impl DialogProcess {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            child: Mutex::new(None),
        }
    }
}

fn handoff_env(params: &DialogParameters) -> Vec<(&'static str, String)> {
    let options = serde_json::to_string(&params.options).unwrap_or_else(|_| "[]".to_string());
    let height = params
        .response_area_height
        .map(|h| h.to_string())
        .unwrap_or_default();

    vec![
        (ENV_CONTEXT_LABEL, params.context_label.clone()),
        (ENV_PROMPT, params.prompt_text.clone()),
        (ENV_OPTIONS, options),
        (ENV_TIMEOUT_SECS, params.timeout_secs.to_string()),
        (ENV_INPUT_HEIGHT, height),
    ]
}

#[async_trait]
impl PresentationSurface for DialogProcess {
    async fn spawn(
        &self,
        params: &DialogParameters,
        events: UnboundedSender<TerminalEvent>,
    ) -> Result<(), SurfaceError> {
        let mut guard = self.child.lock().await;

        if let Some(mut old) = guard.take() {
            info!("terminating superseded dialog surface");
            if let Err(e) = old.kill().await {
                warn!(error = %e, "failed to kill superseded dialog surface");
            }
        }

        debug!(
            program = %self.program,
            context = %params.context_label,
            timeout_secs = params.timeout_secs,
            "launching dialog surface"
        );

        let mut cmd = Command::new(&self.program);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        for var in SCRUBBED_HOST_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in handoff_env(params) {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().map_err(|source| {
            warn!(program = %self.program, error = %source, "failed to spawn dialog surface");
            SurfaceError::Spawn {
                program: self.program.clone(),
                source,
            }
        })?;

        let stdout = child.stdout.take().ok_or(SurfaceError::Pipe { stream: "stdout" })?;
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            let mut classified = false;

            while let Ok(Some(line)) = lines.next_line().await {
                match classify_line(&line) {
                    Some(event) => {
                        classified = true;
                        if events.send(event).is_err() {
                            break;
                        }
                    }
                    None => debug!(line = %line, "unclassified surface output ignored"),
                }
            }

            if !classified {
                info!("dialog surface exited without emitting a terminal event");
            }
        });

        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    warn!(stderr = %line, "dialog surface stderr");
                }
            });
        }

        *guard = Some(child);
        Ok(())
    }

    async fn terminate(&self) {
        if let Some(mut child) = self.child.lock().await.take() {
            match child.kill().await {
                Ok(()) => info!("dialog surface terminated"),
                Err(e) => warn!(error = %e, "failed to kill dialog surface"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn env_map(params: &DialogParameters) -> std::collections::HashMap<&'static str, String> {
        handoff_env(params).into_iter().collect()
    }

    #[test]
    fn handoff_carries_all_named_values() {
        let params = DialogParameters::new("proj", "Pick one")
            .with_options(vec!["a".into(), "b".into()])
            .with_timeout_secs(60);
        let env = env_map(&params);

        assert_eq!(env[ENV_CONTEXT_LABEL], "proj");
        assert_eq!(env[ENV_PROMPT], "Pick one");
        assert_eq!(env[ENV_OPTIONS], r#"["a","b"]"#);
        assert_eq!(env[ENV_TIMEOUT_SECS], "60");
        assert_eq!(env[ENV_INPUT_HEIGHT], "");
    }

    #[test]
    fn handoff_encodes_empty_options_as_empty_array() {
        let params = DialogParameters::new("proj", "Anything?").with_timeout_secs(60);
        let env = env_map(&params);

        assert_eq!(env[ENV_OPTIONS], "[]");
    }

    #[test]
    fn handoff_zero_timeout_and_height() {
        let params = DialogParameters::new("proj", "Done X").with_response_area_height(300);
        let env = env_map(&params);

        assert_eq!(env[ENV_TIMEOUT_SECS], "0");
        assert_eq!(env[ENV_INPUT_HEIGHT], "300");
    }

    #[tokio::test]
    async fn spawn_failure_reports_the_program() {
        let surface = DialogProcess::new("colloquy-surface-test-missing-binary");
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();

        let err = surface
            .spawn(&DialogParameters::new("proj", "hi"), tx)
            .await
            .expect_err("spawn must fail");

        assert!(err.to_string().contains("colloquy-surface-test-missing-binary"));
    }
}
