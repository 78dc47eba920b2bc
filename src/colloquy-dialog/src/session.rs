//! Dialog session manager: the single in-flight correlation record and its
//! resolution.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, mpsc, oneshot};
use tracing::{debug, error, warn};

use crate::error::DialogError;
use crate::outcome::{Outcome, classify};
use crate::params::DialogParameters;
use crate::surface::PresentationSurface;

/// A caller's handle on a not-yet-answered dialog.
#[derive(Debug)]
pub struct PendingReply {
    rx: oneshot::Receiver<Outcome>,
}

impl PendingReply {
    /// Wait for the dialog's outcome. Resolves with [`DialogError::Abandoned`]
    /// when the session is superseded or the bridge shuts down first.
    pub async fn outcome(self) -> Result<Outcome, DialogError> {
        self.rx.await.map_err(|_| DialogError::Abandoned)
    }
}

/// Owns the pending-record table and drives the presentation surface.
///
/// Invariant: at most one record is pending at any instant, and it is 1:1
/// with the surface's live process while both exist. Starting a new session
/// supersedes the previous one: its process is torn down and its caller is
/// released with an error. Each record is fulfilled at most once; terminal
/// events arriving after fulfillment (or for a superseded session) are
/// ignored.
pub struct SessionManager {
    surface: Arc<dyn PresentationSurface>,
    next_session: AtomicU64,
    pending: Arc<Mutex<HashMap<u64, oneshot::Sender<Outcome>>>>,
}

impl SessionManager {
    pub fn new(surface: Arc<dyn PresentationSurface>) -> Self {
        Self {
            surface,
            next_session: AtomicU64::new(1),
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Start a dialog session: supersede any pending one, spawn the surface
    /// with `params`, and return the caller's wait handle.
    pub async fn start_session(
        &self,
        params: DialogParameters,
    ) -> Result<PendingReply, DialogError> {
        let session = self.next_session.fetch_add(1, Ordering::SeqCst);
        let (reply_tx, reply_rx) = oneshot::channel();

        {
            let mut pending = self.pending.lock().await;
            if !pending.is_empty() {
                // Dropping the old sender releases the superseded caller
                // with an Abandoned error.
                warn!(session, "new dialog supersedes a pending one");
                pending.clear();
            }
            pending.insert(session, reply_tx);
            if pending.len() != 1 {
                error!(records = pending.len(), "pending-table invariant violated");
            }
        }

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        if let Err(e) = self.surface.spawn(&params, event_tx).await {
            self.pending.lock().await.remove(&session);
            return Err(e.into());
        }

        let pending = Arc::clone(&self.pending);
        tokio::spawn(async move {
            while let Some(event) = event_rx.recv().await {
                let Some(outcome) = classify(event) else {
                    debug!(session, "dialog closed without a reply, keeping the wait open");
                    continue;
                };

                match pending.lock().await.remove(&session) {
                    Some(tx) => {
                        debug!(session, ?outcome, "dialog resolved");
                        let _ = tx.send(outcome);
                    }
                    None => {
                        debug!(session, "terminal event for a resolved or superseded dialog, ignored");
                    }
                }
            }
        });

        Ok(PendingReply { rx: reply_rx })
    }

    /// Number of pending correlation records (0 or 1 when the invariant
    /// holds).
    pub async fn pending_sessions(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// Tear down the surface and release any pending caller.
    pub async fn shutdown(&self) {
        self.pending.lock().await.clear();
        self.surface.terminate().await;
    }
}
