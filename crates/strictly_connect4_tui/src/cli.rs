//! Command-line interface for connect4.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log file written when `--log-file` is not given.
pub const DEFAULT_LOG_FILE: &str = "connect4.log";

/// Connect 4 - two players, one keyboard
#[derive(Parser, Debug)]
#[command(name = "connect4")]
#[command(about = "Two-player connect four in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a session in the terminal
    Play {
        /// Path to a TOML config file (defaults to ./connect4.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the number of board rows
        #[arg(long)]
        rows: Option<usize>,

        /// Override the number of board columns (at most 9)
        #[arg(long)]
        cols: Option<usize>,

        /// File receiving the log output (the terminal belongs to the game)
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log_file: PathBuf,
    },

    /// Print the default configuration as TOML
    PrintConfig,
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: None,
            rows: None,
            cols: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
