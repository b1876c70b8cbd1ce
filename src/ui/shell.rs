use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        service_url = %context.config.service.base_url,
        log_level = %context.config.logging.level,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;

    loop {
        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }

        if !orchestrator.state().is_running() {
            break;
        }
    }

    tracing::info!("TUI shell stopped");
    Ok(())
}
