use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, service, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let mut context = bootstrap::bootstrap(cli.config.as_deref())?;

            if let Some(base_url) = cli.base_url {
                tracing::debug!(base_url = %base_url, "service base URL overridden from CLI");
                context.config.service.base_url = base_url;
            }

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                service = service::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&context)?;
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
    }

    Ok(())
}
