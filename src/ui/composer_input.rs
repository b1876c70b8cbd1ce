//! Message composer rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{composer::ComposerState, shell_state::Theme};

use super::styles;

/// Placeholder text shown while the composer is empty.
const PLACEHOLDER_TEXT: &str = "Type a message...";

/// Prompt symbol shown before the draft text.
const PROMPT_SYMBOL: &str = "> ";

/// Renders the composer field. The cursor is placed only while the composer
/// has focus (no blocking notice on screen).
pub fn render_composer(
    frame: &mut Frame<'_>,
    area: Rect,
    composer: &ComposerState,
    theme: Theme,
    is_focused: bool,
) {
    let line = build_composer_line(composer, theme);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style(theme)),
    );

    frame.render_widget(paragraph, area);

    if is_focused {
        // Saturating arithmetic keeps very long drafts from overflowing.
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(PROMPT_SYMBOL.len() as u16)
            .saturating_add(composer.cursor_position().min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn build_composer_line(composer: &ComposerState, theme: Theme) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style(theme));

    if composer.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(
                PLACEHOLDER_TEXT.to_owned(),
                styles::input_placeholder_style(theme),
            ),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(composer.text().to_owned(), styles::input_text_style(theme)),
        ])
    }
}
