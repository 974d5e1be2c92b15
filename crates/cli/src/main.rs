//! Scenario replay binary.
//!
//! Loads content from a data directory, plays a scenario's scripted commands
//! through a runtime session and prints the resulting message log.
//! Run with: `delve --data-dir data demo`

mod render;
mod replay;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use replay::Replay;

fn main() -> Result<()> {
    setup_logging();
    Replay::parse().execute()
}

/// Diagnostics go to stderr so stdout stays clean for `--format json`.
///
/// Defaults to `warn`; override with `RUST_LOG` (e.g. `RUST_LOG=delve_runtime=debug`).
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
