//! The console collaborator: everything the turn loop needs from the outside
//! world to show the board and collect choices.

use crate::board::Board;
use crate::player::{Marker, Player};
use crate::rules::WinningLine;
use crate::state::{GameState, Phase, Scoreboard};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Whether a render is the first one of the session or a redraw over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum RenderKind {
    /// First draw; the console may capture its origin or clear the screen.
    Initial,
    /// Repaint of a previously drawn view.
    Redraw,
}

/// A column request answered by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnInput {
    /// A 1-based column number, passed through unfiltered.
    Column(usize),
    /// The user asked to leave the session.
    Quit,
}

/// Read-only snapshot handed to [`Console::render`].
#[derive(Debug, Clone, Copy, new)]
pub struct GameView<'a> {
    /// Current board.
    pub board: &'a Board,
    /// Current phase, winner and active player.
    pub state: &'a GameState,
    /// Both seats, first mover first.
    pub players: &'a [Player; 2],
    /// Finished-game tally for the session.
    pub scoreboard: &'a Scoreboard,
    /// The run that ended the game, if any.
    pub winning_line: Option<&'a WinningLine>,
}

/// Console failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Presentation and input for a game session.
///
/// Requests block until the user answers. Validation of column numbers is
/// the turn loop's job; implementations only filter keys they cannot turn
/// into a number at all.
pub trait Console {
    /// Shows the current view.
    fn render(&mut self, view: &GameView<'_>, kind: RenderKind) -> Result<(), ConsoleError>;

    /// Asks the active player for a column.
    fn request_column_choice(&mut self, active: &Player) -> Result<TurnInput, ConsoleError>;

    /// Asks whether to play again after a game ended.
    fn request_restart_choice(&mut self) -> Result<bool, ConsoleError>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn render(&mut self, view: &GameView<'_>, kind: RenderKind) -> Result<(), ConsoleError> {
        (**self).render(view, kind)
    }

    fn request_column_choice(&mut self, active: &Player) -> Result<TurnInput, ConsoleError> {
        (**self).request_column_choice(active)
    }

    fn request_restart_choice(&mut self) -> Result<bool, ConsoleError> {
        (**self).request_restart_choice()
    }
}

/// What a [`ScriptedConsole`] saw on one render.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RenderRecord {
    /// Initial or redraw.
    kind: RenderKind,
    /// Phase at render time.
    phase: Phase,
    /// Marker of the active player.
    active: Marker,
    /// Marker of the winner, if any.
    winner: Option<Marker>,
    /// Empty cells left on the board.
    empty_cells: usize,
}

/// Console that replays a fixed list of answers.
///
/// Once the column script runs out the console answers [`TurnInput::Quit`];
/// once the restart script runs out it declines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    columns: VecDeque<TurnInput>,
    restarts: VecDeque<bool>,
    renders: Vec<RenderRecord>,
    prompts: usize,
}

impl ScriptedConsole {
    /// Creates a console answering column requests with `columns` (1-based).
    pub fn new(columns: impl IntoIterator<Item = usize>) -> Self {
        Self {
            columns: columns.into_iter().map(TurnInput::Column).collect(),
            ..Self::default()
        }
    }

    /// Queues answers for restart prompts.
    pub fn with_restarts(mut self, restarts: impl IntoIterator<Item = bool>) -> Self {
        self.restarts.extend(restarts);
        self
    }

    /// Queues more column answers.
    pub fn push_columns(&mut self, columns: impl IntoIterator<Item = usize>) {
        self.columns.extend(columns.into_iter().map(TurnInput::Column));
    }

    /// Queues an explicit quit request after the current column answers.
    pub fn push_quit(&mut self) {
        self.columns.push_back(TurnInput::Quit);
    }

    /// Every render seen so far, oldest first.
    pub fn renders(&self) -> &[RenderRecord] {
        &self.renders
    }

    /// Number of column and restart prompts answered.
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl Console for ScriptedConsole {
    fn render(&mut self, view: &GameView<'_>, kind: RenderKind) -> Result<(), ConsoleError> {
        self.renders.push(RenderRecord {
            kind,
            phase: *view.state.phase(),
            active: *view.state.active_player().marker(),
            winner: view.state.winner().as_ref().map(|p| *p.marker()),
            empty_cells: view.board.empty_cells(),
        });
        Ok(())
    }

    fn request_column_choice(&mut self, active: &Player) -> Result<TurnInput, ConsoleError> {
        self.prompts += 1;
        let input = self.columns.pop_front().unwrap_or(TurnInput::Quit);
        debug!(player = %active.name(), ?input, "Scripted column");
        Ok(input)
    }

    fn request_restart_choice(&mut self) -> Result<bool, ConsoleError> {
        self.prompts += 1;
        Ok(self.restarts.pop_front().unwrap_or(false))
    }
}
