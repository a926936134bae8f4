//! Win and tie detection: uniform-lane recognition, the fixed check
//! order, and terminal-state behavior.

use slide5::{Board, GameStatus, Move, Player, SIZE};

/// Drop tokens straight into the grid row by row (no cascade), so a
/// test can lay out an exact position.
fn fill(board: &mut Board, rows: [[Player; SIZE]; SIZE]) {
    for row in rows {
        for (c, token) in row.iter().enumerate() {
            board.simulate_move(Move::col(c), *token);
        }
    }
}

const X: Player = Player::X;
const O: Player = Player::O;

/// A single player's row built through `simulate_move` across row
/// A's five columns wins for that player. (Not reachable through
/// `submit_move`, which alternates turns.)
#[test]
fn test_simulated_row_is_a_win() {
    let mut board = Board::new();
    for c in 0..SIZE {
        board.simulate_move(Move::col(c), Player::X);
    }
    assert_eq!(board.check_for_win(), Player::X);
    assert_eq!(board.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_column_win() {
    let mut board = Board::new();
    for _ in 0..SIZE {
        board.simulate_move(Move::col(3), Player::O);
    }
    assert_eq!(board.check_for_win(), Player::O);
}

#[test]
fn test_main_diagonal_win() {
    let mut board = Board::new();
    for i in 0..SIZE {
        for _ in 0..i {
            board.simulate_move(Move::col(i), Player::O);
        }
        board.simulate_move(Move::col(i), Player::X);
    }
    // Column i now holds i O's above an X at row i: the main
    // diagonal is uniform X, nothing else is uniform.
    assert_eq!(board.check_for_win(), Player::X);
}

#[test]
fn test_anti_diagonal_win() {
    let mut board = Board::new();
    for i in 0..SIZE {
        let col = SIZE - 1 - i;
        for _ in 0..i {
            board.simulate_move(Move::col(col), Player::X);
        }
        board.simulate_move(Move::col(col), Player::O);
    }
    assert_eq!(board.check_for_win(), Player::O);
}

/// With two uniform rows for different players, the earlier row in
/// the A..E scan decides. (Non-parallel lines always share a cell,
/// so differently-owned simultaneous wins only arise on parallel
/// lanes.)
#[test]
fn test_win_priority_earlier_row_decides() {
    let mut board = Board::new();
    fill(
        &mut board,
        [
            [O, O, O, O, O],
            [X, X, X, X, X],
            [X, O, X, O, X],
            [O, X, O, X, O],
            [X, O, O, X, O],
        ],
    );
    assert_eq!(board.check_for_win(), Player::O);
}

/// Same contract for columns: the earlier column in the 1..5 scan
/// decides when no row is uniform.
#[test]
fn test_win_priority_earlier_column_decides() {
    let mut board = Board::new();
    fill(
        &mut board,
        [
            [O, X, X, O, X],
            [O, X, O, X, O],
            [O, X, X, O, X],
            [O, X, O, X, O],
            [O, X, X, O, O],
        ],
    );
    // Columns 1 and 2 are both uniform; column 1 is checked first.
    assert_eq!(board.check_for_win(), Player::O);
}

/// Rows are checked before columns: a uniform row and a uniform
/// column can only share a player, and the row answers first either
/// way.
#[test]
fn test_win_priority_row_before_column() {
    let mut board = Board::new();
    fill(
        &mut board,
        [
            [X, X, X, X, X],
            [X, O, O, O, O],
            [X, O, X, O, X],
            [X, X, O, X, O],
            [X, O, X, O, O],
        ],
    );
    // Row A and column 1 are both uniform X.
    assert_eq!(board.check_for_win(), Player::X);
}

/// Full board, no uniform lane: a tie.
#[test]
fn test_full_board_without_winner_is_tie() {
    let mut board = Board::new();
    fill(
        &mut board,
        [
            [X, X, O, X, O],
            [O, O, X, O, X],
            [X, X, O, X, O],
            [O, O, X, O, X],
            [X, X, O, X, O],
        ],
    );

    assert!(board.is_full());
    assert_eq!(board.check_for_win(), Player::Blank);
    assert!(board.check_for_tie());
    assert_eq!(board.status(), GameStatus::Tie);
    assert_eq!(board.status().marker(), Player::Tie);
}

/// A board that is not full is never a tie, winner or not.
#[test]
fn test_partial_board_is_not_a_tie() {
    let mut board = Board::new();
    assert!(!board.check_for_tie());
    board.submit_move(Move::row(0));
    assert!(!board.check_for_tie());
}

/// A full board with a uniform lane is a win, not a tie.
#[test]
fn test_full_board_with_winner_is_not_a_tie() {
    let mut board = Board::new();
    fill(
        &mut board,
        [
            [X, X, X, X, X],
            [O, O, X, O, O],
            [X, O, O, X, X],
            [O, X, O, O, X],
            [X, O, X, X, O],
        ],
    );
    assert!(board.is_full());
    assert_eq!(board.check_for_win(), Player::X);
    assert!(!board.check_for_tie());
}

/// The engine holds no terminal flag: moves are still accepted after
/// a win, and halting is the caller's job.
#[test]
fn test_no_internal_lockout_after_win() {
    let mut board = Board::new();
    for c in 0..SIZE {
        board.simulate_move(Move::col(c), Player::X);
    }
    assert_eq!(board.check_for_win(), Player::X);

    assert!(board.submit_move(Move::row(4)));
    assert_eq!(board.occupied_count(), SIZE + 1);
}
