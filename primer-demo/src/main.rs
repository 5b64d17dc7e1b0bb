use std::io;

use anyhow::Context;
use clap::Parser;
use primer_demo::config::Cli;
use primer_demo::{run, DemoConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the transcript.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = DemoConfig::from(Cli::parse());
    tracing::debug!(?config, "resolved configuration");

    let mut out = io::stdout().lock();
    // Returning the error prints it with its causes and exits with status 1.
    run(&config, &mut out).context("demo run failed")
}
