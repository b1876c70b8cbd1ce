/// A completed reply exchange from the chat service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// The bot's conversational reply text.
    pub text: String,
    /// Suggestion text when the service flagged an intervention.
    pub intervention: Option<String>,
}

/// Aggregate session report computed by the chat service.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub dominant_mood: String,
    pub avg_score: f64,
    pub summary: String,
}

/// A blocking notice shown over the shell until acknowledged.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Service-flagged suggestion, separate from the normal reply.
    Intervention(String),
    /// End-of-session summary report.
    Summary(SessionSummary),
    /// The summary fetch failed; the session continues.
    SummaryUnavailable,
}
