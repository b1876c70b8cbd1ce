use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput, ServiceEvent},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            if key.code == KeyCode::Char('c') && ctrl {
                return Ok(Some(AppEvent::QuitRequested));
            }

            let named = match key.code {
                KeyCode::Enter => Some("enter"),
                KeyCode::Esc => Some("esc"),
                KeyCode::Backspace => Some("backspace"),
                KeyCode::Delete => Some("delete"),
                KeyCode::Left => Some("left"),
                KeyCode::Right => Some("right"),
                KeyCode::Home => Some("home"),
                KeyCode::End => Some("end"),
                _ => None,
            };

            if let Some(name) = named {
                return Ok(Some(AppEvent::InputKey(KeyInput::new(name, ctrl))));
            }

            if let KeyCode::Char(ch) = key.code {
                return Ok(Some(AppEvent::InputKey(KeyInput::new(
                    ch.to_string(),
                    ctrl,
                ))));
            }
        }

        Ok(None)
    }
}

/// Event source backed by the service completion channel.
pub struct ChannelServiceEventSource {
    receiver: Receiver<ServiceEvent>,
}

impl ChannelServiceEventSource {
    pub fn new(receiver: Receiver<ServiceEvent>) -> Self {
        Self { receiver }
    }
}

impl AppEventSource for ChannelServiceEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        match self.receiver.try_recv() {
            Ok(event) => Ok(Some(AppEvent::Service(event))),
            // Disconnection only happens while the shell is shutting down;
            // treat it like an idle channel.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => Ok(None),
        }
    }
}

/// Combined source for the shell loop: pending service completions are
/// drained before the keyboard is polled.
pub struct ShellEventSource {
    service: ChannelServiceEventSource,
    keyboard: CrosstermEventSource,
}

impl ShellEventSource {
    pub fn new(receiver: Receiver<ServiceEvent>) -> Self {
        Self {
            service: ChannelServiceEventSource::new(receiver),
            keyboard: CrosstermEventSource,
        }
    }
}

impl AppEventSource for ShellEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Some(event) = self.service.next_event()? {
            return Ok(Some(event));
        }

        self.keyboard.next_event()
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}
