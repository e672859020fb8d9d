//! Connect-four grid with gravity-drop move resolution.

use crate::player::{Marker, Player};
use serde::Serialize;
use tracing::{instrument, trace};

/// A resolved drop target: the next free cell of one column.
///
/// Moves can only be produced by a [`Board`] and are valid only until that
/// board is next mutated. [`Board::place`] rejects a stale move instead of
/// leaving a marker floating over empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Row index of the target cell (row 0 fills first).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column index.
    pub fn col(&self) -> usize {
        self.col
    }
}

/// Grid of `rows × cols` cells, each empty or holding one marker.
///
/// Dimensions are fixed at construction. Row 0 is the floor: a column fills
/// from row 0 upward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells.
    cells: Vec<Option<Marker>>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "board dimensions must be positive, got {rows}x{cols}"
        );
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Reads a cell, treating every off-board coordinate as empty.
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Marker> {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return None;
        };
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Returns the next free cell of every column that still has one,
    /// ordered by column.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn available_columns(&self) -> Vec<Move> {
        (0..self.cols).filter_map(|col| self.drop_target(col)).collect()
    }

    /// Returns the next free cell of `col`, or `None` when the column is
    /// full or does not exist.
    pub fn drop_target(&self, col: usize) -> Option<Move> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .find(|&row| self.cells[row * self.cols + col].is_none())
            .map(|row| Move { row, col })
    }

    /// Writes the player's marker into the move's cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is off this board, already claimed, or has an
    /// empty cell below it. A move obtained from this board's
    /// [`available_columns`](Self::available_columns) and applied before any
    /// other mutation never triggers this.
    #[instrument(skip(self, player), fields(marker = %player.marker(), row = mv.row, col = mv.col))]
    pub fn place(&mut self, player: &Player, mv: Move) {
        assert!(
            mv.row < self.rows && mv.col < self.cols,
            "cell ({}, {}) is off a {}x{} board",
            mv.row,
            mv.col,
            self.rows,
            self.cols
        );
        let idx = mv.row * self.cols + mv.col;
        assert!(
            self.cells[idx].is_none(),
            "cell ({}, {}) is already claimed",
            mv.row,
            mv.col
        );
        assert!(
            mv.row == 0 || self.cells[idx - self.cols].is_some(),
            "cell ({}, {}) has nothing below it",
            mv.row,
            mv.col
        );
        self.cells[idx] = Some(*player.marker());
        trace!("Marker placed");
    }

    /// True when no column accepts another marker.
    pub fn is_full(&self) -> bool {
        self.available_columns().is_empty()
    }

    /// Number of cells not yet claimed.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Replaces the grid with a fresh all-empty one of the same size.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn reset(&mut self) {
        self.cells = vec![None; self.rows * self.cols];
    }
}
