//! Use case for ending a chat session with a summary fetch.

use crate::domain::{
    session::{Notice, SessionSummary},
    shell_state::ShellState,
};

use super::contracts::ChatGateway;

/// Requests the end-of-session summary from the chat service.
///
/// Fire-and-forget: the transcript stays intact until the summary actually
/// arrives, so a failed fetch leaves the session untouched.
pub fn end_session(gateway: &dyn ChatGateway, state: &mut ShellState) {
    gateway.request_summary();
    state.summary_requested();
    tracing::debug!("requested session summary");
}

/// Applies a fetched summary: raise the report notice, then reset the session.
pub fn apply_summary(state: &mut ShellState, summary: SessionSummary) {
    state.transcript_mut().clear();
    state.set_notice(Notice::Summary(summary));
    state.summary_resolved();
}

/// Applies a failed summary fetch. The transcript is preserved for retry.
pub fn apply_summary_failure(state: &mut ShellState) {
    state.set_notice(Notice::SummaryUnavailable);
    state.summary_resolved();
}
