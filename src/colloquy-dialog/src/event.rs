//! The line-oriented micro-protocol spoken by the presentation surface.

/// Marker line: the window was dismissed without producing a reply.
pub const CLOSED_MARKER: &str = "DIALOG_CLOSED";
/// Marker line: the configured timeout elapsed with no human response.
pub const TIMEOUT_MARKER: &str = "DIALOG_TIMEOUT";
/// Prefix carrying the user's typed or selected response.
pub const TEXT_REPLY_PREFIX: &str = "TEXT_FROM_RENDERER:";

/// A classified signal read from the surface's stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Window dismissed; carries no reply.
    Closed,
    /// The user's response. The surface trims it before emitting.
    TextReply(String),
    /// Timeout elapsed with no response.
    TimedOut,
}

/// Classify one stdout line. Lines outside the protocol are diagnostic
/// noise and classify to `None`.
pub fn classify_line(line: &str) -> Option<TerminalEvent> {
    if let Some(payload) = line.strip_prefix(TEXT_REPLY_PREFIX) {
        return Some(TerminalEvent::TextReply(payload.to_string()));
    }

    match line.trim_end() {
        CLOSED_MARKER => Some(TerminalEvent::Closed),
        TIMEOUT_MARKER => Some(TerminalEvent::TimedOut),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_markers() {
        assert_eq!(classify_line("DIALOG_CLOSED"), Some(TerminalEvent::Closed));
        assert_eq!(classify_line("DIALOG_TIMEOUT"), Some(TerminalEvent::TimedOut));
    }

    #[test]
    fn classifies_text_reply() {
        assert_eq!(
            classify_line("TEXT_FROM_RENDERER:deploy to staging"),
            Some(TerminalEvent::TextReply("deploy to staging".to_string()))
        );
    }

    #[test]
    fn text_reply_payload_is_kept_verbatim() {
        // Whitespace-only payloads reach the resolver, which maps them to
        // an empty-reply outcome; classification must not eat them.
        assert_eq!(
            classify_line("TEXT_FROM_RENDERER:   "),
            Some(TerminalEvent::TextReply("   ".to_string()))
        );
        assert_eq!(
            classify_line("TEXT_FROM_RENDERER:"),
            Some(TerminalEvent::TextReply(String::new()))
        );
    }

    #[test]
    fn noise_lines_are_ignored() {
        assert_eq!(classify_line(""), None);
        assert_eq!(classify_line("starting renderer v2.1"), None);
        assert_eq!(classify_line("DIALOG_CLOSED_EARLY"), None);
        assert_eq!(classify_line(" TEXT_FROM_RENDERER:a"), None);
    }

    #[test]
    fn trailing_whitespace_on_markers_is_tolerated() {
        assert_eq!(classify_line("DIALOG_TIMEOUT \t"), Some(TerminalEvent::TimedOut));
    }
}
