use super::session::{ChatReply, SessionSummary};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    Service(ServiceEvent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }
}

/// Completion of an outstanding chat service request.
///
/// Completions arrive in response order, which may differ from request order
/// when several requests are in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceEvent {
    ReplyArrived(ChatReply),
    ReplyFailed,
    SummaryArrived(SessionSummary),
    SummaryFailed,
}
