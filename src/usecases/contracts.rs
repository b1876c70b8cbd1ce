use anyhow::Result;

use crate::domain::{events::AppEvent, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn state_mut(&mut self) -> &mut ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Fire-and-forget port to the chat service.
///
/// Implementations issue the request in the background and deliver the
/// outcome later as a `ServiceEvent`. There is no cancellation and no
/// ordering guarantee between outstanding requests.
pub trait ChatGateway {
    fn post_message(&self, text: &str);
    fn request_summary(&self);
}
