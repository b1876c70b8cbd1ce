use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

const LOG_FILE_NAME: &str = "mindchat.log";

/// Initializes tracing with a file writer.
///
/// The TUI owns the terminal, so diagnostics go to a log file under the
/// state directory instead of stdout.
pub fn init(config: &LogConfig, layout: &StorageLayout) -> Result<(), AppError> {
    let file_appender = tracing_appender::rolling::never(layout.log_dir(), LOG_FILE_NAME);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)
}
