mod args;
mod chart;
mod config;
mod export;
mod models;
mod report;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use args::Args;
use config::Config;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::resolve(args.common.data_file.as_deref())?;

    // The TUI owns the terminal, so it logs to a file instead of stderr.
    let log_file = args.command.is_none().then(|| config.log_file());
    init_logger(args.common.log_level, log_file)?;
    debug!("Using data file {}", config.data_file().display());

    let store = config.store();
    match args.command {
        None => run::as_tui(&store),
        Some(command) => run::as_cli(command, &store),
    }
}

fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    match log_file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
