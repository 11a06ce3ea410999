//! Tracing subscriber setup shared by both binaries.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Build the default filter directive for the given verbosity.
///
/// The HTTP stack is kept at `warn` so request chatter does not drown the
/// per-monitor progress lines.
pub fn default_directive(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("{level},reqwest=warn,hyper=warn,hyper_util=warn")
}

/// Install the global subscriber. `RUST_LOG` wins over the default directive.
pub fn init(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(debug)))
        .context("Failed to build log filter")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stdout)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")
}
