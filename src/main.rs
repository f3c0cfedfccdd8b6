//! Command-line interface for loggen
//!
//! # Usage Examples
//!
//! ```bash
//! # Defaults: 100 lines, prefix "loggen-", extension ".log"
//! loggen
//!
//! # Legacy single-dash spelling
//! loggen -ext=txt -prefix=data-log -count=250
//!
//! # Verbose progress on stderr
//! RUST_LOG=debug loggen --count 10
//! ```

use clap::Parser;
use loggen::{rewrite_legacy_flags, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the echoed log file
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(rewrite_legacy_flags(std::env::args_os()));

    let stdout = std::io::stdout();
    let summary = loggen::run(&cli, &mut stdout.lock())?;

    tracing::info!(
        "Wrote {} lines to {} (seed={})",
        summary.metrics.lines_written,
        summary.path.display(),
        summary.seed
    );

    Ok(())
}
