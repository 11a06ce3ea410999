//! `create-monitors`: reconcile every selected definition file.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::api::{DatadogClient, MonitorApi};
use crate::config::Settings;
use crate::fs::load_definition;
use crate::reconcile::{ReconcileOptions, Reconciler, Summary};
use crate::sources::SourceSelection;

/// Resolve sources under `cwd` and upsert each file against the live API.
pub fn execute(
    settings: &Settings,
    selection: &SourceSelection,
    options: ReconcileOptions,
    cwd: &Path,
) -> Result<()> {
    let client = DatadogClient::new(settings)?;
    let summary = run(&client, selection, options, cwd)?;
    print_summary(&summary, options.dry_run);
    Ok(())
}

/// Resolve sources and reconcile them. Fails before any remote call when no
/// file resolves.
pub fn run<A: MonitorApi>(
    api: &A,
    selection: &SourceSelection,
    options: ReconcileOptions,
    cwd: &Path,
) -> Result<Summary> {
    let files = selection.resolve(cwd);
    if files.is_empty() {
        bail!("No yaml files found to process!");
    }
    sync_files(api, &files, options)
}

/// Load and upsert `files` in order.
///
/// The first unreadable file aborts the run; files before it have already
/// been applied.
pub fn sync_files<A: MonitorApi>(
    api: &A,
    files: &[PathBuf],
    options: ReconcileOptions,
) -> Result<Summary> {
    let reconciler = Reconciler::new(api, options);
    let mut summary = Summary::default();

    for file in files {
        let definition = load_definition(file)?;
        let outcome = reconciler.upsert(definition)?;
        tracing::debug!("{}: {outcome}", file.display());
        summary.record(outcome);
    }

    Ok(summary)
}

fn print_summary(summary: &Summary, dry_run: bool) {
    let line = format!(
        "{} created, {} updated, {} unchanged",
        summary.created, summary.updated, summary.unchanged
    );
    if dry_run {
        println!("{} {} {}", "ℹ".blue(), line, "(dry run)".dimmed());
    } else {
        println!("{} {}", "✓".green().bold(), line);
    }
}
