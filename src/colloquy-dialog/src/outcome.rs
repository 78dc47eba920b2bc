//! Terminal-event classification into caller-visible outcomes.

use crate::event::TerminalEvent;

/// The normalized result of a dialog session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The timeout elapsed before the user answered.
    TimedOut,
    /// The user submitted an empty or whitespace-only reply.
    EmptyReply,
    /// The user's answer.
    Replied(String),
}

/// Map a terminal event to an outcome. `Closed` has no outcome mapping:
/// the session stays pending and the caller keeps waiting.
pub fn classify(event: TerminalEvent) -> Option<Outcome> {
    match event {
        TerminalEvent::TimedOut => Some(Outcome::TimedOut),
        TerminalEvent::TextReply(text) if text.trim().is_empty() => Some(Outcome::EmptyReply),
        TerminalEvent::TextReply(text) => Some(Outcome::Replied(text)),
        TerminalEvent::Closed => None,
    }
}
