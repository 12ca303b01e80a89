//! # Stationer CLI
//!
//! Console menu for the stationery shop.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load configuration (STATIONER_* environment variables)              │
//! │  2. Initialize logging (stderr, filter from STATIONER_LOG)              │
//! │  3. Run the menu loop on stdin / stdout                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod menu;
mod shell;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::shell::Shell;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::load()?;
    init_tracing(&config.log_filter);

    info!(
        discount_bps = config.coloring_discount_bps,
        seed_catalog = config.seed_catalog,
        json = config.json_output,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), config).run()?;

    info!("Session finished");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
/// An unparsable filter falls back to `warn`.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}
