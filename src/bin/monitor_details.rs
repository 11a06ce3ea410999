use anyhow::Result;
use clap::Parser;
use monitor_sync::commands::details;
use monitor_sync::config::{self, Settings};
use monitor_sync::logging;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "monitor-details")]
#[command(about = "Print a Datadog monitor's current state as JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// Monitor id
    #[arg(conflicts_with = "list")]
    monitor_id: Option<String>,

    /// List every monitor as '<name> <id>'
    #[arg(short, long)]
    list: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(config::debug_enabled()) {
        eprintln!("Warning: {e:#}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::from_env()?;
    details::execute(&settings, cli.monitor_id.as_deref(), cli.list)
}
