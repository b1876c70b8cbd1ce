use std::{path::Path, sync::mpsc};

use anyhow::{Context, Result};

use crate::{
    domain::shell_state::Theme,
    infra::{self, error::AppError, storage_layout::StorageLayout},
    service::{HttpChatService, ThreadedChatGateway},
    ui::ShellEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;

    let layout = StorageLayout::resolve()?;
    layout.ensure_dirs()?;
    infra::logging::init(&context.config.logging, &layout)?;

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;
    Ok(AppContext::new(config))
}

/// Event source and orchestrator wired to a live chat service client.
pub struct ComposedShell {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn compose_shell(context: &AppContext) -> Result<ComposedShell> {
    let (service_tx, service_rx) = mpsc::channel();

    let service = HttpChatService::new(context.config.service.base_url.as_str())
        .context("failed to build chat service client")?;
    let gateway = ThreadedChatGateway::new(service, service_tx);

    let mut orchestrator = DefaultShellOrchestrator::new(gateway);
    if context.config.ui.dark_mode {
        orchestrator.state_mut().set_theme(Theme::Dark);
    }

    Ok(ComposedShell {
        event_source: Box::new(ShellEventSource::new(service_rx)),
        orchestrator: Box::new(orchestrator),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::AppConfig;

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");

        assert_eq!(context.config, AppConfig::default());
    }

    #[test]
    fn compose_shell_applies_configured_dark_mode() {
        let mut config = AppConfig::default();
        config.ui.dark_mode = true;
        let context = AppContext::new(config);

        let shell = compose_shell(&context).expect("shell should compose");

        assert_eq!(shell.orchestrator.state().theme(), Theme::Dark);
    }

    #[test]
    fn compose_shell_defaults_to_light_theme() {
        let context = AppContext::new(AppConfig::default());

        let shell = compose_shell(&context).expect("shell should compose");

        assert_eq!(shell.orchestrator.state().theme(), Theme::Light);
    }
}
