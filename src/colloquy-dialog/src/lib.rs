//! Colloquy Dialog - request correlation and presentation-process lifecycle.
//!
//! The bridge between a tool call and a human answer:
//! - [`DialogProcess`] spawns and kills the external presentation process,
//!   injects [`DialogParameters`] as a named environment handoff, and
//!   classifies its line-oriented stdout into [`TerminalEvent`]s.
//! - [`SessionManager`] holds the single in-flight correlation record,
//!   supersedes it when a new dialog starts, and fulfills it on the first
//!   terminal event.
//! - [`classify`] maps terminal events to the caller-visible [`Outcome`].
//!
//! At most one dialog is live at a time; see [`SessionManager`] for the
//! invariant.

mod error;
mod event;
mod outcome;
mod params;
mod session;
mod surface;

pub use error::{DialogError, SurfaceError};
pub use event::{CLOSED_MARKER, TEXT_REPLY_PREFIX, TIMEOUT_MARKER, TerminalEvent, classify_line};
pub use outcome::{Outcome, classify};
pub use params::{DialogParameters, NO_TIMEOUT};
pub use session::{PendingReply, SessionManager};
pub use surface::{
    DialogProcess, ENV_CONTEXT_LABEL, ENV_INPUT_HEIGHT, ENV_OPTIONS, ENV_PROMPT, ENV_TIMEOUT_SECS,
    PresentationSurface,
};
