//! Colloquy - main entry point.
//!
//! Runs the MCP server on stdio with the two dialog tools registered.
//! Stdout carries protocol frames only; all diagnostics go to stderr.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use colloquy_dialog::{DialogProcess, SessionManager};
use colloquy_mcp_server::McpServerBuilder;
use colloquy_tools::{AskUserTool, RequestConfirmationTool};

const INSTRUCTIONS: &str = "\
Call ask_user whenever a decision needs human input, and \
request_user_confirmation before treating a task as finished. Timeouts and \
empty replies are answers: ask again if the input is still needed.";

#[derive(Debug, Parser)]
#[command(name = "colloquy", version, about = "An MCP server that asks the user")]
struct Cli {
    /// Default timeout in seconds for ask_user dialogs. 0 waits forever.
    #[arg(short = 't', long = "timeout", default_value_t = 60)]
    timeout: u64,

    /// Presentation surface program launched for each dialog.
    #[arg(long, env = "COLLOQUY_SURFACE", default_value = "colloquy-surface")]
    surface: String,
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Stdout is the protocol channel; logs must stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    info!(
        timeout_secs = cli.timeout,
        surface = %cli.surface,
        "starting colloquy"
    );

    let sessions = Arc::new(SessionManager::new(Arc::new(DialogProcess::new(
        cli.surface,
    ))));

    let server = McpServerBuilder::new("colloquy", env!("CARGO_PKG_VERSION"))
        .instructions(INSTRUCTIONS)
        .tool_handler(Arc::new(AskUserTool::new(sessions.clone(), cli.timeout)))
        .tool_handler(Arc::new(RequestConfirmationTool::new(sessions.clone())))
        .build()?;

    let result = tokio::select! {
        result = server.clone().run_stdio() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, shutting down");
            server.stop().await;
            Ok(())
        }
    };

    // Outstanding dialogs do not outlive the bridge.
    sessions.shutdown().await;

    result
}
