//! Blocking notice rendering.
//!
//! Notices render as a centered overlay that stays on screen until
//! acknowledged, mirroring the forced-attention semantics of a modal alert.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::domain::{session::Notice, shell_state::Theme};

use super::styles;

const ACK_HINT: &str = "Enter/Esc: dismiss";

pub fn render_notice(frame: &mut Frame<'_>, notice: &Notice, theme: Theme) {
    let text_lines = notice_text_lines(notice);
    // Text + blank line + hint, plus the surrounding border.
    let height = (text_lines.len() as u16).saturating_add(4);
    let area = centered_rect(frame.area(), 60, height);

    let mut lines: Vec<Line<'_>> = text_lines
        .iter()
        .map(|text| Line::from(text.as_str()))
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(ACK_HINT, styles::notice_hint_style(theme)));

    let panel = Paragraph::new(lines).style(styles::base_style(theme)).block(
        Block::default()
            .title(notice_title(notice))
            .borders(Borders::ALL)
            .border_style(styles::notice_border_style(theme)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(panel, area);
}

/// Title shown in the notice border.
pub fn notice_title(notice: &Notice) -> &'static str {
    match notice {
        Notice::Intervention(_) => "Suggestion",
        Notice::Summary(_) => "Chat Summary",
        Notice::SummaryUnavailable => "Summary",
    }
}

/// Body lines of the notice, without styling.
pub fn notice_text_lines(notice: &Notice) -> Vec<String> {
    match notice {
        Notice::Intervention(text) => vec![text.clone()],
        Notice::Summary(summary) => vec![
            format!("Dominant mood: {}", summary.dominant_mood),
            format!("Average score: {}", summary.avg_score),
            format!("Tip: {}", summary.summary),
            String::new(),
            "Goodbye, take care!".to_owned(),
        ],
        Notice::SummaryUnavailable => vec![
            "Could not fetch the chat summary.".to_owned(),
            "The session continues.".to_owned(),
        ],
    }
}

fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .areas(area);

    let [_, centered, _] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Percentage(percent_x),
            Constraint::Fill(1),
        ])
        .areas(middle);

    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::SessionSummary;

    #[test]
    fn intervention_notice_carries_suggestion_text() {
        let notice = Notice::Intervention("Try deep breathing".to_owned());

        assert_eq!(notice_title(&notice), "Suggestion");
        assert_eq!(notice_text_lines(&notice), vec!["Try deep breathing"]);
    }

    #[test]
    fn summary_notice_lists_mood_score_and_tip() {
        let notice = Notice::Summary(SessionSummary {
            dominant_mood: "calm".to_owned(),
            avg_score: 7.2,
            summary: "Keep it up".to_owned(),
        });

        let lines = notice_text_lines(&notice);
        let body = lines.join("\n");

        assert!(body.contains("calm"));
        assert!(body.contains("7.2"));
        assert!(body.contains("Keep it up"));
        assert!(body.contains("Goodbye"));
    }

    #[test]
    fn unavailable_summary_notice_explains_retry() {
        let lines = notice_text_lines(&Notice::SummaryUnavailable);

        assert!(lines[0].contains("Could not fetch"));
    }

    #[test]
    fn centered_rect_fits_inside_parent_area() {
        let area = Rect::new(0, 0, 100, 40);

        let rect = centered_rect(area, 60, 10);

        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
        assert!(rect.x >= area.x);
        assert!(rect.y >= area.y);
    }

    #[test]
    fn centered_rect_clamps_height_to_parent() {
        let area = Rect::new(0, 0, 20, 5);

        let rect = centered_rect(area, 60, 10);

        assert!(rect.height <= area.height);
    }
}
