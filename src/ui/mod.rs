//! UI layer: terminal rendering and event intake.

mod composer_input;
mod event_source;
mod notice;
pub mod shell;
mod styles;
mod terminal;
mod transcript_rendering;
mod view;

pub(crate) use event_source::ShellEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
