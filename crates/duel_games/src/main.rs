//! Duel - line-driven pairwise tic-tac-toe.
//!
//! Reads commands such as `start alice bob` and `move alice bob alice 1 1`
//! from stdin and prints the board after each move. Logs go to stderr;
//! set `RUST_LOG` to adjust them.

#![warn(missing_docs)]

mod cli;
mod command;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use console::Console;
use duel_registry::{RegistryConfig, TicTacToeRegistry};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config)?;
    info!(key_separator = %config.key_separator(), "Starting duel console");

    let console = Console::new(TicTacToeRegistry::new(config));
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    console.run(stdin.lock(), &mut stdout, !cli.quiet)?;

    info!("Input closed, exiting");
    Ok(())
}

/// Config from `--config`, else `DUEL_CONFIG`, else defaults.
fn load_config(path: Option<PathBuf>) -> Result<RegistryConfig> {
    let path = path.or_else(|| std::env::var_os("DUEL_CONFIG").map(PathBuf::from));
    match path {
        Some(path) => RegistryConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(RegistryConfig::default()),
    }
}
