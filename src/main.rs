use anyhow::{Context, Result};
use clap::Parser;
use monitor_sync::commands::create;
use monitor_sync::config::{self, Settings};
use monitor_sync::logging;
use monitor_sync::reconcile::{ReconcileMode, ReconcileOptions};
use monitor_sync::sources::{split_paths, SourceSelection};
use std::env;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "create-monitors")]
#[command(about = "Create or update Datadog monitors from YAML definitions", long_about = None)]
#[command(version)]
struct Cli {
    /// Process a local 'monitors' directory
    #[arg(short, long)]
    monitors: bool,

    /// Process the 'infrastructure_monitors' directory
    #[arg(long)]
    infrastructure: bool,

    /// Process a comma separated list of directories
    #[arg(short, long, value_name = "DIRS")]
    dir: Option<String>,

    /// Process a comma separated list of yaml files
    #[arg(short, long, value_name = "FILES")]
    config: Option<String>,

    /// Mute all monitors
    #[arg(short, long)]
    silence: bool,

    /// Skip the update when a monitor already matches its definition
    #[arg(long)]
    diff: bool,

    /// Report what would be created or updated without changing anything
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn selection(&self) -> SourceSelection {
        SourceSelection {
            monitors: self.monitors,
            infrastructure: self.infrastructure,
            configs: self.config.as_deref().map(split_paths).unwrap_or_default(),
            dirs: self.dir.as_deref().map(split_paths).unwrap_or_default(),
        }
    }

    fn options(&self) -> ReconcileOptions {
        ReconcileOptions {
            silence: self.silence,
            mode: if self.diff {
                ReconcileMode::Diff
            } else {
                ReconcileMode::Overwrite
            },
            dry_run: self.dry_run,
        }
    }
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
    let cwd = env::current_dir().context("Failed to get current directory")?;
    create::execute(&settings, &cli.selection(), cli.options(), &cwd)
}
