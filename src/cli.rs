use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mindchat", about = "Terminal client for the MindCare chat service")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Chat service base URL, overriding the configured one
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the chat TUI
    Run,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn missing_subcommand_falls_back_to_run() {
        let cli = Cli::parse_from(["mindchat"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(cli.config, None);
        assert_eq!(cli.base_url, None);
    }

    #[test]
    fn run_accepts_config_path_and_base_url_override() {
        let cli = Cli::parse_from([
            "mindchat",
            "run",
            "--config",
            "custom.toml",
            "--base-url",
            "http://localhost:9000",
        ]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(cli.config.as_deref(), Some(Path::new("custom.toml")));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
    }
}
