//! Tests for four-in-a-row detection in every orientation and position.

use strictly_connect4::{Board, Direction, Player, find_four_in_a_row, has_four_in_a_row};

fn x() -> Player {
    Player::new("David", 'X')
}

fn o() -> Player {
    Player::new("Sam", 'O')
}

/// Builds a board where `player` owns `targets`; cells under a target are
/// propped up with a filler marker so gravity allows the placement.
fn board_with(rows: usize, cols: usize, player: &Player, targets: &[(usize, usize)]) -> Board {
    let filler = Player::new("filler", '+');
    let mut board = Board::new(rows, cols);

    let mut ordered = targets.to_vec();
    ordered.sort();
    for (row, col) in ordered {
        while let Some(mv) = board.drop_target(col) {
            if mv.row() == row {
                board.place(player, mv);
                break;
            }
            board.place(&filler, mv);
        }
    }
    board
}

fn run(origin: (isize, isize), delta: (isize, isize)) -> Vec<(usize, usize)> {
    (0..4)
        .map(|k| {
            (
                (origin.0 + delta.0 * k) as usize,
                (origin.1 + delta.1 * k) as usize,
            )
        })
        .collect()
}

#[test]
fn test_horizontal_run_anywhere() {
    for row in 0..6 {
        for col in 0..=3 {
            let cells = run((row, col), (0, 1));
            let board = board_with(6, 7, &x(), &cells);
            let line = find_four_in_a_row(&board, &x()).expect("horizontal run");
            assert_eq!(*line.direction(), Direction::Horizontal);
            assert!(!has_four_in_a_row(&board, &o()));
        }
    }
}

#[test]
fn test_vertical_run_anywhere() {
    for row in 0..=2 {
        for col in 0..7 {
            let cells = run((row, col), (1, 0));
            let board = board_with(6, 7, &x(), &cells);
            let line = find_four_in_a_row(&board, &x()).expect("vertical run");
            assert_eq!(*line.direction(), Direction::Vertical);
        }
    }
}

#[test]
fn test_rising_diagonal_anywhere() {
    for row in 0..=2 {
        for col in 0..=3 {
            let cells = run((row, col), (1, 1));
            let board = board_with(6, 7, &o(), &cells);
            let line = find_four_in_a_row(&board, &o()).expect("rising diagonal");
            assert_eq!(*line.direction(), Direction::DiagonalUp);
        }
    }
}

#[test]
fn test_falling_diagonal_anywhere() {
    for row in 3..6 {
        for col in 0..=3 {
            let cells = run((row, col), (-1, 1));
            let board = board_with(6, 7, &o(), &cells);
            let line = find_four_in_a_row(&board, &o()).expect("falling diagonal");
            assert_eq!(*line.direction(), Direction::DiagonalDown);
        }
    }
}

#[test]
fn test_mirrored_diagonals_both_detected() {
    // Same run reflected left-right, hugging both side edges.
    let left = [(0, 0), (1, 1), (2, 2), (3, 3)];
    let right: Vec<(usize, usize)> = left.iter().map(|&(r, c)| (r, 6 - c)).collect();

    assert!(has_four_in_a_row(&board_with(6, 7, &x(), &left), &x()));
    assert!(has_four_in_a_row(&board_with(6, 7, &x(), &right), &x()));
}

#[test]
fn test_corner_diagonals_reaching_top_row() {
    let top_right = [(2, 3), (3, 4), (4, 5), (5, 6)];
    let top_left = [(5, 0), (4, 1), (3, 2), (2, 3)];

    assert!(has_four_in_a_row(&board_with(6, 7, &x(), &top_right), &x()));
    assert!(has_four_in_a_row(&board_with(6, 7, &x(), &top_left), &x()));
}

#[test]
fn test_transposed_board_swaps_orientation() {
    let horizontal = board_with(6, 7, &x(), &[(2, 1), (2, 2), (2, 3), (2, 4)]);
    let vertical = board_with(7, 6, &x(), &[(1, 2), (2, 2), (3, 2), (4, 2)]);

    assert_eq!(
        *find_four_in_a_row(&horizontal, &x()).unwrap().direction(),
        Direction::Horizontal
    );
    assert_eq!(
        *find_four_in_a_row(&vertical, &x()).unwrap().direction(),
        Direction::Vertical
    );
}

#[test]
fn test_run_does_not_wrap_around_row_end() {
    // Three at the right edge of row 0 plus the first cell of row 1 are
    // adjacent in row-major storage but not on the board.
    let board = board_with(6, 7, &x(), &[(0, 4), (0, 5), (0, 6), (1, 0)]);
    assert!(!has_four_in_a_row(&board, &x()));
}

#[test]
fn test_broken_run_not_detected() {
    let board = board_with(6, 7, &x(), &[(0, 0), (0, 1), (0, 3), (0, 4)]);
    assert!(!has_four_in_a_row(&board, &x()));

    let board = board_with(6, 7, &x(), &[(0, 0), (1, 1), (3, 3), (4, 4)]);
    assert!(!has_four_in_a_row(&board, &x()));
}

#[test]
fn test_small_boards_never_win() {
    let board = board_with(3, 3, &x(), &[(0, 0), (1, 1), (2, 2)]);
    assert!(!has_four_in_a_row(&board, &x()));
}

#[test]
fn test_reset_board_has_no_run() {
    let mut board = board_with(6, 7, &x(), &run((0, 0), (0, 1)));
    assert!(has_four_in_a_row(&board, &x()));

    board.reset();

    assert!(!has_four_in_a_row(&board, &x()));
    assert!(!has_four_in_a_row(&board, &o()));
}

#[test]
fn test_detection_is_repeatable() {
    let board = board_with(6, 7, &o(), &run((0, 6), (1, 0)));
    let first = find_four_in_a_row(&board, &o());
    let second = find_four_in_a_row(&board, &o());
    assert_eq!(first, second);
    assert!(first.is_some());
}
