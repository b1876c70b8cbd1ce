//! Use case for the per-message exchange with the chat service.
//!
//! Sending is optimistic: the user message is appended and the composer
//! cleared before any response arrives. The completion side applies the
//! reply, the intervention notice, or the canned fallback.

use crate::domain::{
    message::Message,
    session::{ChatReply, Notice},
    shell_state::ShellState,
};

use super::contracts::ChatGateway;

/// Fallback bot line appended when the exchange fails.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong.";

/// Domain-level errors for the send operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// Draft is empty after trimming whitespace. The shell treats this as a
    /// silent no-op: nothing is appended and no request is issued.
    EmptyMessage,
}

/// Queues a draft for sending.
///
/// Validates the draft (must not be empty after trimming), appends the user
/// message to the transcript, clears the composer, and dispatches the request
/// through the gateway. On `EmptyMessage` the state is left untouched.
pub fn send_message(
    gateway: &dyn ChatGateway,
    state: &mut ShellState,
    draft: &str,
) -> Result<(), SendMessageError> {
    let text = draft.trim();
    if text.is_empty() {
        return Err(SendMessageError::EmptyMessage);
    }

    state.transcript_mut().push(Message::user(text));
    state.composer_mut().clear();
    state.reply_requested();
    gateway.post_message(text);

    tracing::debug!(chars = text.chars().count(), "queued outgoing message");
    Ok(())
}

/// Applies a successful reply exchange to the shell state.
pub fn apply_reply(state: &mut ShellState, reply: ChatReply) {
    state.transcript_mut().push(Message::bot(reply.text));
    if let Some(text) = reply.intervention {
        state.set_notice(Notice::Intervention(text));
    }
    state.reply_resolved();
}

/// Applies a failed reply exchange: the canned apology stands in for the bot.
pub fn apply_reply_failure(state: &mut ShellState) {
    state.transcript_mut().push(Message::bot(FALLBACK_REPLY));
    state.reply_resolved();
}
