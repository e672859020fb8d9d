//! Strictly Connect4 - connect-four game logic
//!
//! A two-player, turn-based drop game on a grid whose size is fixed when the
//! session starts. This crate holds the rules and the turn state machine and
//! does no I/O of its own: a [`Console`] implementation renders the board and
//! collects column choices.
//!
//! # Architecture
//!
//! - **Board**: cell matrix, gravity-drop move resolution, full detection
//! - **Rules**: four-in-a-row and draw detection as pure functions
//! - **GameLoop**: alternating turns, Playing/Ended phases, restarts
//! - **Console**: collaborator trait plus a scripted implementation
//!
//! # Example
//!
//! ```
//! use strictly_connect4::{GameLoop, Player, ScriptedConsole, TurnOutcome};
//!
//! let players = [Player::new("David", 'X'), Player::new("Sam", 'O')];
//! let mut game = GameLoop::new(players, 6, 7, ScriptedConsole::default());
//!
//! for col in [1, 2, 1, 2, 1, 2] {
//!     assert_eq!(game.play_column(col), TurnOutcome::Continued);
//! }
//! assert!(matches!(game.play_column(1), TurnOutcome::Won(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod console;
mod game_loop;
mod player;
pub mod rules;
mod state;

// Crate-level exports - Board
pub use board::{Board, Move};

// Crate-level exports - Players
pub use player::{Marker, Player};

// Crate-level exports - Rules
pub use rules::{Direction, WinningLine, find_four_in_a_row, has_four_in_a_row};

// Crate-level exports - State
pub use state::{GameState, Phase, Scoreboard, TurnOutcome};

// Crate-level exports - Console collaborator
pub use console::{
    Console, ConsoleError, GameView, RenderKind, RenderRecord, ScriptedConsole, TurnInput,
};

// Crate-level exports - Turn loop
pub use game_loop::GameLoop;
