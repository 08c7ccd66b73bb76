use anyhow::Result;
use clap::Parser;
use mockif::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG, defaulting to info so progress is visible.
    // Logs go to stderr; stdout is reserved for --dry-run and --json output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().execute()
}
