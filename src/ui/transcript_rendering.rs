//! Transcript rendering logic.
//!
//! Messages are first flattened into display rows (time + sender on the
//! first row, indented continuations for further text lines), then turned
//! into styled list items.

use chrono::{Local, TimeZone};
use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};

use crate::domain::{
    message::{Message, Sender},
    shell_state::Theme,
};

use super::styles;

// Aligns continuation rows with the text column: time (5) + gap (1) +
// sender label (3) + gap (2).
const CONTINUATION_INDENT: &str = "           ";

/// One visual row of the transcript list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptRow {
    /// First row of a message: time column, sender label, first text line.
    Lead {
        time: String,
        sender: Sender,
        text: String,
    },
    /// Further text lines of a multi-line message.
    Continuation { sender: Sender, text: String },
}

/// Flattens messages into display rows in insertion order.
pub fn build_transcript_rows(messages: &[Message]) -> Vec<TranscriptRow> {
    let mut rows = Vec::new();

    for message in messages {
        let mut text_lines = message.text.lines();

        rows.push(TranscriptRow::Lead {
            time: format_time(message.timestamp_ms),
            sender: message.sender,
            text: text_lines.next().unwrap_or_default().to_owned(),
        });

        for text_line in text_lines {
            rows.push(TranscriptRow::Continuation {
                sender: message.sender,
                text: text_line.to_owned(),
            });
        }
    }

    rows
}

/// Converts a display row to a ListItem for ratatui rendering.
pub fn row_to_list_item(row: &TranscriptRow, theme: Theme) -> ListItem<'static> {
    ListItem::new(row_line(row, theme))
}

fn row_line(row: &TranscriptRow, theme: Theme) -> Line<'static> {
    match row {
        TranscriptRow::Lead { time, sender, text } => Line::from(vec![
            Span::styled(format!("{time:>5} "), styles::timestamp_style(theme)),
            Span::styled(
                format!("{:<3}", sender.display_label()),
                sender_style(*sender, theme),
            ),
            Span::raw("  "),
            Span::styled(text.clone(), styles::message_text_style(theme)),
        ]),
        TranscriptRow::Continuation { sender: _, text } => Line::from(vec![
            Span::raw(CONTINUATION_INDENT.to_owned()),
            Span::styled(text.clone(), styles::message_text_style(theme)),
        ]),
    }
}

fn sender_style(sender: Sender, theme: Theme) -> ratatui::style::Style {
    match sender {
        Sender::User => styles::user_sender_style(theme),
        Sender::Bot => styles::bot_sender_style(theme),
    }
}

fn format_time(timestamp_ms: i64) -> String {
    let datetime = match Local.timestamp_millis_opt(timestamp_ms) {
        chrono::LocalResult::Single(dt) => dt,
        chrono::LocalResult::Ambiguous(dt, _) => dt,
        chrono::LocalResult::None => return "     ".to_owned(),
    };

    datetime.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_to_string(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn single_line_message_becomes_one_lead_row() {
        let messages = vec![Message::at(Sender::User, "Hello", 0)];

        let rows = build_transcript_rows(&messages);

        assert_eq!(rows.len(), 1);
        assert!(matches!(
            &rows[0],
            TranscriptRow::Lead {
                sender: Sender::User,
                text,
                ..
            } if text == "Hello"
        ));
    }

    #[test]
    fn multi_line_message_adds_continuation_rows() {
        let messages = vec![Message::at(Sender::Bot, "first\nsecond\nthird", 0)];

        let rows = build_transcript_rows(&messages);

        assert_eq!(rows.len(), 3);
        assert!(matches!(&rows[0], TranscriptRow::Lead { .. }));
        assert!(matches!(
            &rows[1],
            TranscriptRow::Continuation { text, .. } if text == "second"
        ));
        assert!(matches!(
            &rows[2],
            TranscriptRow::Continuation { text, .. } if text == "third"
        ));
    }

    #[test]
    fn rows_preserve_message_order() {
        let messages = vec![
            Message::at(Sender::User, "Hello", 0),
            Message::at(Sender::Bot, "Hi there!", 0),
        ];

        let rows = build_transcript_rows(&messages);

        assert!(matches!(
            &rows[0],
            TranscriptRow::Lead { sender: Sender::User, .. }
        ));
        assert!(matches!(
            &rows[1],
            TranscriptRow::Lead { sender: Sender::Bot, .. }
        ));
    }

    #[test]
    fn lead_row_line_contains_time_sender_label_and_text() {
        let row = TranscriptRow::Lead {
            time: "12:30".to_owned(),
            sender: Sender::User,
            text: "Hello".to_owned(),
        };

        let text = line_to_string(&row_line(&row, Theme::Light));

        assert!(text.contains("12:30"));
        assert!(text.contains("You"));
        assert!(text.contains("Hello"));
    }

    #[test]
    fn continuation_row_line_is_indented() {
        let row = TranscriptRow::Continuation {
            sender: Sender::Bot,
            text: "second".to_owned(),
        };

        let text = line_to_string(&row_line(&row, Theme::Dark));

        assert!(text.starts_with(CONTINUATION_INDENT));
        assert!(text.ends_with("second"));
    }

    #[test]
    fn format_time_renders_hh_mm() {
        let formatted = format_time(1577836800000);

        assert_eq!(formatted.len(), 5);
        assert!(formatted.contains(':'));
    }

    #[test]
    fn format_time_handles_out_of_range_timestamp() {
        assert_eq!(format_time(i64::MIN), "     ");
    }
}
