//! gquery-rs: advanced search-engine query generator
//!
//! This is the main entry point for the application.

use anyhow::Result;
use clap::Parser;
use gquery_rs::{
    cli::{self, Cli},
    config,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = config::load(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || settings.general.debug);
    debug!("Starting gquery-rs v{}", gquery_rs::VERSION);

    cli::run(cli, settings)
}

/// Log to stderr so stdout only carries queries
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
