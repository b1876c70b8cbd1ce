use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput, ServiceEvent},
    shell_state::ShellState,
};

use super::{
    contracts::{ChatGateway, ShellOrchestrator},
    end_session::{apply_summary, apply_summary_failure, end_session},
    send_message::{apply_reply, apply_reply_failure, send_message, SendMessageError},
};

pub struct DefaultShellOrchestrator<G>
where
    G: ChatGateway,
{
    state: ShellState,
    gateway: G,
}

impl<G> DefaultShellOrchestrator<G>
where
    G: ChatGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            state: ShellState::default(),
            gateway,
        }
    }

    fn submit_composer(&mut self) {
        let draft = self.state.composer().text().to_owned();
        match send_message(&self.gateway, &mut self.state, &draft) {
            Ok(()) => {}
            // Empty drafts are ignored without surfacing an error.
            Err(SendMessageError::EmptyMessage) => {}
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        // An active notice blocks everything except acknowledgment.
        if self.state.notice().is_some() {
            if matches!(key.key.as_str(), "enter" | "esc") {
                self.state.clear_notice();
            }
            return;
        }

        if key.ctrl {
            match key.key.as_str() {
                "e" => end_session(&self.gateway, &mut self.state),
                "t" => self.state.toggle_theme(),
                _ => {}
            }
            return;
        }

        match key.key.as_str() {
            "enter" => self.submit_composer(),
            "backspace" => self.state.composer_mut().delete_char_before(),
            "delete" => self.state.composer_mut().delete_char_at(),
            "left" => self.state.composer_mut().move_cursor_left(),
            "right" => self.state.composer_mut().move_cursor_right(),
            "home" => self.state.composer_mut().move_cursor_home(),
            "end" => self.state.composer_mut().move_cursor_end(),
            "esc" => {}
            other => {
                let mut chars = other.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    self.state.composer_mut().insert_char(ch);
                }
            }
        }
    }

    fn handle_service_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::ReplyArrived(reply) => apply_reply(&mut self.state, reply),
            ServiceEvent::ReplyFailed => apply_reply_failure(&mut self.state),
            ServiceEvent::SummaryArrived(summary) => apply_summary(&mut self.state, summary),
            ServiceEvent::SummaryFailed => apply_summary_failure(&mut self.state),
        }
    }
}

impl<G> ShellOrchestrator for DefaultShellOrchestrator<G>
where
    G: ChatGateway,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::Service(service_event) => self.handle_service_event(service_event),
        }

        Ok(())
    }
}
