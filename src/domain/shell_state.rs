use super::{composer::ComposerState, session::Notice, transcript::TranscriptState};

/// Display mode for rendering. Has no server-side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    running: bool,
    theme: Theme,
    transcript: TranscriptState,
    composer: ComposerState,
    notice: Option<Notice>,
    pending_replies: usize,
    summary_pending: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            running: true,
            theme: Theme::default(),
            transcript: TranscriptState::default(),
            composer: ComposerState::default(),
            notice: None,
            pending_replies: 0,
            summary_pending: false,
        }
    }
}

impl ShellState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn transcript(&self) -> &TranscriptState {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut TranscriptState {
        &mut self.transcript
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ComposerState {
        &mut self.composer
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Number of chat requests still waiting for a reply.
    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    pub fn reply_requested(&mut self) {
        self.pending_replies += 1;
    }

    pub fn reply_resolved(&mut self) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    pub fn is_summary_pending(&self) -> bool {
        self.summary_pending
    }

    pub fn summary_requested(&mut self) {
        self.summary_pending = true;
    }

    pub fn summary_resolved(&mut self) {
        self.summary_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_running_with_light_theme() {
        let state = ShellState::default();

        assert!(state.is_running());
        assert_eq!(state.theme(), Theme::Light);
        assert!(state.transcript().is_empty());
        assert!(state.notice().is_none());
    }

    #[test]
    fn stop_marks_shell_as_not_running() {
        let mut state = ShellState::default();
        state.stop();

        assert!(!state.is_running());
    }

    #[test]
    fn toggle_theme_twice_restores_original_mode() {
        let mut state = ShellState::default();
        let original = state.theme();

        state.toggle_theme();
        assert_ne!(state.theme(), original);

        state.toggle_theme();
        assert_eq!(state.theme(), original);
    }

    #[test]
    fn reply_counters_track_in_flight_requests() {
        let mut state = ShellState::default();
        state.reply_requested();
        state.reply_requested();

        assert_eq!(state.pending_replies(), 2);

        state.reply_resolved();
        assert_eq!(state.pending_replies(), 1);
    }

    #[test]
    fn reply_resolved_saturates_at_zero() {
        let mut state = ShellState::default();
        state.reply_resolved();

        assert_eq!(state.pending_replies(), 0);
    }

    #[test]
    fn summary_pending_flag_follows_request_lifecycle() {
        let mut state = ShellState::default();
        assert!(!state.is_summary_pending());

        state.summary_requested();
        assert!(state.is_summary_pending());

        state.summary_resolved();
        assert!(!state.is_summary_pending());
    }
}
