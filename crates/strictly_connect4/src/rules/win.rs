//! Four-in-a-row detection.

use crate::board::Board;
use crate::player::{Marker, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, instrument};

/// Length of a winning run.
pub const RUN_LENGTH: usize = 4;

/// Orientation of a run, named with row 0 at the bottom of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Direction {
    /// Along a row, left to right.
    Horizontal,
    /// Along a column, bottom to top.
    Vertical,
    /// Rising to the right (/).
    DiagonalUp,
    /// Falling to the right (\).
    DiagonalDown,
}

impl Direction {
    /// Step `(row, col)` from one cell of the run to the next.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (1, 1),
            Direction::DiagonalDown => (-1, 1),
        }
    }
}

/// The cells of a detected run, origin first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, new)]
pub struct WinningLine {
    /// Orientation of the run.
    direction: Direction,
    /// `(row, col)` of each cell in the run.
    cells: [(usize, usize); RUN_LENGTH],
}

impl WinningLine {
    /// True if `(row, col)` is part of the run.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Returns true if `player` owns four contiguous cells anywhere on the board.
#[instrument(skip(board), fields(marker = %player.marker()))]
pub fn has_four_in_a_row(board: &Board, player: &Player) -> bool {
    find_four_in_a_row(board, player).is_some()
}

/// Finds the first run of four cells owned by `player`.
///
/// Every cell is tried as the origin of a run in each [`Direction`]. Reads
/// go through [`Board::cell_at`], so reads past the edge compare as empty.
#[instrument(skip(board), fields(marker = %player.marker()))]
pub fn find_four_in_a_row(board: &Board, player: &Player) -> Option<WinningLine> {
    let marker = *player.marker();

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            for direction in Direction::iter() {
                if let Some(line) = run_from(board, marker, row, col, direction) {
                    debug!(%direction, row, col, "Four in a row");
                    return Some(line);
                }
            }
        }
    }

    None
}

fn run_from(
    board: &Board,
    marker: Marker,
    row: usize,
    col: usize,
    direction: Direction,
) -> Option<WinningLine> {
    let (d_row, d_col) = direction.delta();
    let mut cells = [(0, 0); RUN_LENGTH];

    for (step, slot) in cells.iter_mut().enumerate() {
        let r = row as isize + d_row * step as isize;
        let c = col as isize + d_col * step as isize;
        if board.cell_at(r, c) != Some(marker) {
            return None;
        }
        // cell_at only matches on-board coordinates, so both are non-negative.
        *slot = (r as usize, c as usize);
    }

    Some(WinningLine::new(direction, cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_all(board: &mut Board, player: &Player, cols: &[usize]) {
        for &col in cols {
            let mv = board.drop_target(col).expect("column has room");
            board.place(player, mv);
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(6, 7);
        assert!(!has_four_in_a_row(&board, &Player::new("David", 'X')));
        assert!(!has_four_in_a_row(&board, &Player::new("Sam", 'O')));
    }

    #[test]
    fn test_three_is_not_enough() {
        let mut board = Board::new(6, 7);
        let x = Player::new("David", 'X');
        drop_all(&mut board, &x, &[0, 1, 2]);
        assert!(!has_four_in_a_row(&board, &x));
    }

    #[test]
    fn test_reports_line_cells() {
        let mut board = Board::new(6, 7);
        let x = Player::new("David", 'X');
        drop_all(&mut board, &x, &[3, 4, 5, 6]);

        let line = find_four_in_a_row(&board, &x).unwrap();
        assert_eq!(*line.direction(), Direction::Horizontal);
        assert_eq!(*line.cells(), [(0, 3), (0, 4), (0, 5), (0, 6)]);
        assert!(line.contains(0, 6));
        assert!(!line.contains(0, 2));
    }

    #[test]
    fn test_other_players_run_does_not_count() {
        let mut board = Board::new(6, 7);
        let x = Player::new("David", 'X');
        let o = Player::new("Sam", 'O');
        drop_all(&mut board, &o, &[2, 2, 2, 2]);

        assert!(has_four_in_a_row(&board, &o));
        assert!(!has_four_in_a_row(&board, &x));
    }
}
