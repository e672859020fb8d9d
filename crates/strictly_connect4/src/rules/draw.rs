//! Draw detection.

use super::win::has_four_in_a_row;
use crate::board::Board;
use crate::player::Player;
use tracing::instrument;

/// A full board on which none of `players` owns a run.
///
/// The turn loop asks this after the mover failed to complete a run, so a
/// board filled by a winning move is never reported as a draw.
#[instrument(skip_all)]
pub fn is_draw(board: &Board, players: &[Player]) -> bool {
    board.is_full() && players.iter().all(|p| !has_four_in_a_row(board, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, players: &[Player; 2], cols: &[usize]) {
        for (turn, &col) in cols.iter().enumerate() {
            let mv = board.drop_target(col).expect("column has room");
            board.place(&players[turn % 2], mv);
        }
    }

    #[test]
    fn test_partly_filled_board_is_not_draw() {
        let players = [Player::new("David", 'X'), Player::new("Sam", 'O')];
        let mut board = Board::new(2, 2);
        assert!(!is_draw(&board, &players));

        fill(&mut board, &players, &[0, 1, 1]);
        assert!(!is_draw(&board, &players));
    }

    #[test]
    fn test_full_board_without_runs_is_draw() {
        // X O / O X stacked in a 2x2 cannot hold four of anything.
        let players = [Player::new("David", 'X'), Player::new("Sam", 'O')];
        let mut board = Board::new(2, 2);
        fill(&mut board, &players, &[0, 1, 1, 0]);

        assert!(board.is_full());
        assert!(is_draw(&board, &players));
    }

    #[test]
    fn test_full_board_with_run_is_not_draw() {
        let players = [Player::new("David", 'X'), Player::new("Sam", 'O')];
        let mut board = Board::new(1, 4);
        for col in 0..4 {
            let mv = board.drop_target(col).unwrap();
            board.place(&players[0], mv);
        }

        assert!(board.is_full());
        assert!(!is_draw(&board, &players));
    }
}
