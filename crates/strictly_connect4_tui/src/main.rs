//! Connect 4 - terminal entry point
//!
//! Wires the configured players, the game loop and the terminal console.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use strictly_connect4::{GameLoop, Scoreboard};
use strictly_connect4_tui::{Cli, Command, GameConfig, TerminalConsole};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            rows,
            cols,
            log_file,
        } => play(config, rows, cols, &log_file),
        Command::PrintConfig => {
            print!("{}", GameConfig::default_toml()?);
            Ok(())
        }
    }
}

/// Sends logs to a file so they never interfere with the game screen.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Runs an interactive session.
#[instrument(skip_all)]
fn play(
    config_path: Option<PathBuf>,
    rows: Option<usize>,
    cols: Option<usize>,
    log_file: &Path,
) -> Result<()> {
    init_logging(log_file)?;
    info!("Starting Connect 4");

    let config = GameConfig::load(config_path.as_deref())?.with_overrides(rows, cols);
    config.validate()?;

    let console = TerminalConsole::enter()?;
    let mut game = GameLoop::new(config.players(), *config.rows(), *config.cols(), console);
    let result = game.run();

    let mut console = game.into_console();
    let restored = console.exit();

    let score = result.inspect_err(|e| error!(error = %e, "Session failed"))?;
    restored?;

    print_summary(&config, &score);
    Ok(())
}

fn print_summary(config: &GameConfig, score: &Scoreboard) {
    if score.games() == 0 {
        println!("No games finished. Bye!");
        return;
    }
    println!(
        "Thanks for playing! {} {} - {} {} ({} draws)",
        config.first().name(),
        score.first_wins(),
        score.second_wins(),
        config.second().name(),
        score.draws()
    );
}
