use chrono::Utc;

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Returns the display label shown next to the message.
    pub fn display_label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp_ms: i64,
}

impl Message {
    /// Creates a user-authored message stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self::at(Sender::User, text, Utc::now().timestamp_millis())
    }

    /// Creates a bot-authored message stamped with the current time.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::at(Sender::Bot, text, Utc::now().timestamp_millis())
    }

    /// Creates a message with an explicit timestamp.
    pub fn at(sender: Sender, text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp_ms,
        }
    }
}
