//! Command-line interface for the duel driver.

use clap::Parser;
use std::path::PathBuf;

/// Duel - play pairwise tic-tac-toe games from line commands on stdin
#[derive(Parser, Debug)]
#[command(name = "duel")]
#[command(about = "Drive pairwise tic-tac-toe games from stdin", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a registry config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress the prompt and help banner
    #[arg(short, long)]
    pub quiet: bool,
}
