//! Turn state machine driving a session between two players.

use crate::board::Board;
use crate::console::{Console, ConsoleError, GameView, RenderKind, TurnInput};
use crate::player::Player;
use crate::rules::{WinningLine, find_four_in_a_row, is_draw};
use crate::state::{GameState, Scoreboard, TurnOutcome};
use tracing::{debug, info, instrument};

/// Owns the board and game state for one session and runs the turn loop.
///
/// ```text
/// Playing --move, no run, room left--> Playing   (active player swaps)
/// Playing --move completes a run-----> Ended     (winner recorded)
/// Playing --move fills the board-----> Ended     (draw)
/// Ended   --restart------------------> Playing   (fresh board, first player)
/// Ended   --decline------------------> session over
/// ```
#[derive(Debug)]
pub struct GameLoop<C> {
    table: Table,
    console: C,
}

/// Everything on the table for one session, kept apart from the console so
/// a view of it can be lent while the console is borrowed mutably.
#[derive(Debug)]
struct Table {
    board: Board,
    state: GameState,
    players: [Player; 2],
    scoreboard: Scoreboard,
    winning_line: Option<WinningLine>,
}

impl Table {
    fn view(&self) -> GameView<'_> {
        GameView::new(
            &self.board,
            &self.state,
            &self.players,
            &self.scoreboard,
            self.winning_line.as_ref(),
        )
    }
}

impl<C> GameLoop<C> {
    /// Creates a session on a `rows × cols` board. `players[0]` moves first
    /// in every game.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[instrument(skip(players, console), fields(first = %players[0].name(), second = %players[1].name()))]
    pub fn new(players: [Player; 2], rows: usize, cols: usize, console: C) -> Self {
        let state = GameState::new(players[0].clone());
        Self {
            table: Table {
                board: Board::new(rows, cols),
                state,
                players,
                scoreboard: Scoreboard::default(),
                winning_line: None,
            },
            console,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.table.board
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.table.state
    }

    /// Both seats, first mover first.
    pub fn players(&self) -> &[Player; 2] {
        &self.table.players
    }

    /// Finished-game tally for the session.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.table.scoreboard
    }

    /// The run that ended the current game, if it was won.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.table.winning_line.as_ref()
    }

    /// The console collaborator.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the loop, handing back the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Snapshot of everything a console needs to draw.
    pub fn view(&self) -> GameView<'_> {
        self.table.view()
    }

    /// Offers a 1-based column on behalf of the active player.
    ///
    /// Columns out of range or already full are rejected without consuming
    /// the turn, as is any column offered after the game ended. Only the
    /// mover is checked for a run, since nobody else's markers changed.
    #[instrument(skip(self), fields(player = %self.table.state.active_player().name()))]
    pub fn play_column(&mut self, column: usize) -> TurnOutcome {
        if !self.table.state.is_playing() {
            debug!("Game over, column ignored");
            return TurnOutcome::Rejected;
        }

        let Some(col) = column.checked_sub(1) else {
            debug!("Column out of range");
            return TurnOutcome::Rejected;
        };
        let Some(mv) = self
            .table
            .board
            .available_columns()
            .into_iter()
            .find(|mv| mv.col() == col)
        else {
            debug!("Column out of range or full");
            return TurnOutcome::Rejected;
        };

        let mover = self.table.state.active_player().clone();
        self.table.board.place(&mover, mv);

        if let Some(line) = find_four_in_a_row(&self.table.board, &mover) {
            info!(winner = %mover.name(), direction = %line.direction(), "Game won");
            let first_seat = mover.same_as(&self.table.players[0]);
            self.table.scoreboard.record_win(first_seat);
            self.table.state.finish(Some(mover));
            self.table.winning_line = Some(line);
            return TurnOutcome::Won(line);
        }

        if is_draw(&self.table.board, &self.table.players) {
            info!("Board full, game drawn");
            self.table.scoreboard.record_draw();
            self.table.state.finish(None);
            return TurnOutcome::Drawn;
        }

        let next = self.opponent_of(&mover).clone();
        self.table.state.pass_turn(next);
        TurnOutcome::Continued
    }

    /// Starts a new game: empty board, no winner, first player to move.
    /// The scoreboard is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.table.board.reset();
        self.table.state = GameState::new(self.table.players[0].clone());
        self.table.winning_line = None;
        info!("Game restarted");
    }

    fn opponent_of(&self, player: &Player) -> &Player {
        if self.table.players[0].same_as(player) {
            &self.table.players[1]
        } else {
            &self.table.players[0]
        }
    }
}

impl<C: Console> GameLoop<C> {
    /// Runs the session until the players decline a restart or quit.
    ///
    /// Input the turn procedure rejects is dropped and the same player is
    /// asked again, with no retry limit. Returns the final scoreboard.
    ///
    /// # Errors
    ///
    /// Returns the console's error if rendering or reading input fails.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Scoreboard, ConsoleError> {
        info!(
            rows = self.table.board.rows(),
            cols = self.table.board.cols(),
            "Starting session"
        );
        self.render(RenderKind::Initial)?;

        loop {
            if self.table.state.is_playing() {
                let active = self.table.state.active_player().clone();
                match self.console.request_column_choice(&active)? {
                    TurnInput::Quit => {
                        info!(player = %active.name(), "Player quit");
                        break;
                    }
                    TurnInput::Column(column) => {
                        if self.play_column(column).is_accepted() {
                            self.render(RenderKind::Redraw)?;
                        }
                    }
                }
            } else if self.console.request_restart_choice()? {
                self.restart();
                self.render(RenderKind::Redraw)?;
            } else {
                info!("Restart declined");
                break;
            }
        }

        info!(games = self.table.scoreboard.games(), "Session over");
        Ok(self.table.scoreboard)
    }

    fn render(&mut self, kind: RenderKind) -> Result<(), ConsoleError> {
        self.console.render(&self.table.view(), kind)
    }
}
