//! Game phase, turn outcomes and the per-session scoreboard.

use crate::player::Player;
use crate::rules::WinningLine;
use derive_getters::Getters;
use serde::Serialize;
use strum::Display;

/// Coarse phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Phase {
    /// Moves are being accepted.
    Playing,
    /// Won or drawn; waiting for a restart decision.
    Ended,
}

/// Complete state of the current game, apart from the board itself.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameState {
    /// Current phase.
    phase: Phase,
    /// Set only when a four-in-a-row ended the game.
    winner: Option<Player>,
    /// Player whose turn it is. In [`Phase::Ended`] this is whoever would
    /// have moved next and is used for display only.
    active_player: Player,
}

impl GameState {
    /// Fresh state with `first` to move.
    pub fn new(first: Player) -> Self {
        Self {
            phase: Phase::Playing,
            winner: None,
            active_player: first,
        }
    }

    /// True while moves are accepted.
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// True when the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        self.phase == Phase::Ended && self.winner.is_none()
    }

    pub(crate) fn pass_turn(&mut self, next: Player) {
        self.active_player = next;
    }

    pub(crate) fn finish(&mut self, winner: Option<Player>) {
        self.phase = Phase::Ended;
        self.winner = winner;
    }
}

/// Result of offering one column choice to the turn procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    /// Out of range, full, or the game is not in play. Nothing changed.
    Rejected,
    /// Marker placed, next player to move.
    Continued,
    /// Marker placed and completed a run for the mover.
    Won(WinningLine),
    /// Marker placed, board full, no run.
    Drawn,
}

impl TurnOutcome {
    /// True if a marker was placed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, TurnOutcome::Rejected)
    }
}

/// Tally of finished games across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Scoreboard {
    /// Games won by the first seat.
    first_wins: u32,
    /// Games won by the second seat.
    second_wins: u32,
    /// Games ending on a full board.
    draws: u32,
}

impl Scoreboard {
    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }

    pub(crate) fn record_win(&mut self, first_seat: bool) {
        if first_seat {
            self.first_wins += 1;
        } else {
            self.second_wins += 1;
        }
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }
}
