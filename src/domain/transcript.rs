use super::message::Message;

/// Append-only, session-scoped list of exchanged messages.
///
/// Insertion order is display order. Individual messages are never mutated
/// or removed; the whole transcript is cleared when a session ends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranscriptState {
    messages: Vec<Message>,
}

impl TranscriptState {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::Sender;

    #[test]
    fn new_transcript_is_empty() {
        let transcript = TranscriptState::default();

        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut transcript = TranscriptState::default();
        transcript.push(Message::user("Hello"));
        transcript.push(Message::bot("Hi there!"));

        let messages = transcript.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "Hello");
        assert_eq!(messages[1].sender, Sender::Bot);
        assert_eq!(messages[1].text, "Hi there!");
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut transcript = TranscriptState::default();
        transcript.push(Message::user("Hello"));
        transcript.push(Message::bot("Hi there!"));

        transcript.clear();

        assert!(transcript.is_empty());
    }
}
