//! Colloquy Tools - the protocol-facing dialog tools.
//!
//! Two tools are exposed: [`AskUserTool`] for open-ended questions with
//! optional canned answers, and [`RequestConfirmationTool`] for
//! acknowledgment of a completed action. Both validate their arguments,
//! build [`colloquy_dialog::DialogParameters`], delegate to the session
//! manager, and map the resolved outcome to a single text payload.

mod ask_user;
mod confirm;

use colloquy_dialog::Outcome;

pub use ask_user::AskUserTool;
pub use confirm::RequestConfirmationTool;

/// Tool name for open-ended questions.
pub const ASK_USER: &str = "ask_user";
/// Tool name for confirmations.
pub const REQUEST_USER_CONFIRMATION: &str = "request_user_confirmation";

/// Map an outcome to the text returned to the protocol caller. Timeouts and
/// empty replies are answers, not errors; their text invites a retry.
fn outcome_text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Replied(text) => text,
        Outcome::TimedOut => {
            "The user did not answer before the timeout elapsed. Ask again if the input is still needed."
                .to_string()
        }
        Outcome::EmptyReply => {
            "The user submitted an empty reply. Ask again if the input is still needed."
                .to_string()
        }
    }
}
