//! Cyclesense CLI
//!
//! Runs the API server, analyzes single observations, and manages
//! configuration.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config_handlers;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use cyclesense_core::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config.as_deref();

    match args.command {
        Command::Config { action } => {
            init_tracing("warn");
            config_handlers::handle_config_command(config_path, action)?;
        }
        Command::Serve { host, port } => {
            let config = load_config(config_path)?;
            commands::cmd_serve(config, host, port).await?;
        }
        Command::Analyze(analyze) => {
            load_config(config_path)?;
            commands::cmd_analyze(&analyze)?;
        }
        Command::Graph => {
            load_config(config_path)?;
            commands::cmd_graph()?;
        }
    }

    Ok(())
}

/// Loads configuration and installs logging at its level.
fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config = Config::load(config_path)?;
    init_tracing(&config.logging.level);
    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}

/// `RUST_LOG` wins; otherwise `default_level` applies.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
