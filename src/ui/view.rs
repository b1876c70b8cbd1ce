use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

use crate::domain::shell_state::ShellState;

use super::composer_input::render_composer;
use super::notice::render_notice;
use super::styles;
use super::transcript_rendering::{build_transcript_rows, row_to_list_item};

const APP_TITLE: &str = "MindChat";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let theme = state.theme();
    let full_area = frame.area();

    frame.render_widget(Block::default().style(styles::base_style(theme)), full_area);

    let [header_area, transcript_area, input_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(full_area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(APP_TITLE, styles::header_style(theme)),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", theme.as_label()),
            styles::status_style(theme),
        ),
    ]));
    frame.render_widget(header, header_area);

    render_transcript_panel(frame, transcript_area, state);
    render_composer(
        frame,
        input_area,
        state.composer(),
        theme,
        state.notice().is_none(),
    );

    let status = Paragraph::new(status_line(state)).style(styles::status_style(theme));
    frame.render_widget(status, status_area);

    if let Some(notice) = state.notice() {
        render_notice(frame, notice, theme);
    }
}

fn render_transcript_panel(
    frame: &mut Frame<'_>,
    area: ratatui::layout::Rect,
    state: &ShellState,
) {
    let theme = state.theme();
    let block = Block::default()
        .title("Conversation")
        .borders(Borders::ALL)
        .border_style(styles::panel_border_style(theme));

    let messages = state.transcript().messages();
    if messages.is_empty() {
        let panel = Paragraph::new("No messages yet. Say hello!").block(block);
        frame.render_widget(panel, area);
        return;
    }

    let rows = build_transcript_rows(messages);
    let items: Vec<_> = rows.iter().map(|row| row_to_list_item(row, theme)).collect();

    // Follow the newest message: keep the tail of the list in view.
    let viewport_height = area.height.saturating_sub(2) as usize;
    let scroll_offset = rows.len().saturating_sub(viewport_height);

    let list = List::new(items).block(block);
    let mut list_state = ListState::default();
    *list_state.offset_mut() = scroll_offset;
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn status_line(state: &ShellState) -> String {
    let pending = state.pending_replies();
    let mut segments = vec![format!("theme: {}", state.theme().as_label())];

    if pending > 0 {
        segments.push(format!("waiting for {pending} reply(s)"));
    }
    if state.is_summary_pending() {
        segments.push("fetching summary".to_owned());
    }

    segments.push("Enter: send | Ctrl+E: end chat | Ctrl+T: theme | Ctrl+C: quit".to_owned());
    segments.join(" | ")
}
