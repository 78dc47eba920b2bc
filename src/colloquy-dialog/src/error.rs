//! Error types for the dialog bridge.

use thiserror::Error;

/// Failures raised by a presentation surface implementation.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to launch dialog surface `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dialog surface {stream} pipe unavailable")]
    Pipe { stream: &'static str },
}

/// Failures visible to a dialog caller.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// The wait ended without an outcome: the session was superseded by a
    /// newer dialog or the bridge shut down.
    #[error("dialog was superseded or shut down before an answer arrived")]
    Abandoned,
}
