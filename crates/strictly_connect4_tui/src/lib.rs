//! Terminal front end for Strictly Connect4
//!
//! Everything between the game loop and a human at a keyboard: the
//! command line, TOML configuration, key mapping, and a ratatui console.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod keymap;
pub mod terminal;
pub mod ui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, PlayerConfig};
pub use terminal::{Screen, TerminalConsole};
