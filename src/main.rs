use anyhow::Result;
use clap::Parser;

use calckit::cli::{Cli, handle_command};
use calckit::config;

/// Initialize the tracing subscriber for logging.
fn init_logging(default_filter: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Users can override with RUST_LOG environment variable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    let config = config::init_config();
    let output = handle_command(&cli.command, config)?;
    println!("{}", output);
    Ok(())
}
