//! The board engine: grid state, sliding moves, win/tie detection,
//! and the simulate/undo primitives used for move evaluation.
//!
//! ## Sliding
//!
//! A move pushes a new token in at a lane's open end (left edge for
//! rows, top edge for columns). Every token already in the lane is
//! displaced one step toward the closed end; the first blank cell
//! absorbs the shift. A lane with no blank cell rejects the move and
//! the grid is left untouched.
//!
//! ## Lookahead primitives
//!
//! [`Board::simulate_move`] deliberately does NOT replay the sliding
//! cascade: it drops the token straight into the lane's first blank
//! cell. [`Board::undo_move`] clears the occupied cell closest to
//! the closed end, which reverses a simulate exactly when the lane's
//! tokens form an unbroken run from the open end. Crossing lanes can
//! punch holes in that run, so evaluation code probes candidates on
//! a copy of the board (see the `ai` module) and reads
//! [`position_score`](crate::core::score::position_score) for the
//! landing square. The simulate and submit code paths must stay
//! separate; unifying them would change evaluation behavior.
//!
//! ## Terminal states
//!
//! The engine holds no terminal flag. Callers poll
//! [`Board::check_for_win`] / [`Board::check_for_tie`] (or
//! [`Board::status`]) after each move and stop feeding input when the
//! game is over; the board itself will keep accepting moves.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::moves::{Move, ParseMoveError};
use super::player::Player;
use super::square::{Square, SIZE};

/// Outcome snapshot for callers polling after each move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No winner and at least one blank cell.
    InProgress,
    /// Five in a row, column, or diagonal.
    Won(Player),
    /// Board full with no winner.
    Tie,
}

impl GameStatus {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The outcome in `Player` vocabulary: the winning token,
    /// `Player::Tie` for a draw, `Player::Blank` while in progress.
    #[must_use]
    pub const fn marker(self) -> Player {
        match self {
            GameStatus::InProgress => Player::Blank,
            GameStatus::Won(p) => p,
            GameStatus::Tie => Player::Tie,
        }
    }
}

/// The 5x5 sliding board.
///
/// Owns the grid and the turn. Grid cells are always one of
/// {`X`, `O`, `Blank`}; `Player::Tie` never occupies a cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Player; SIZE]; SIZE],
    current: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: [[Player::Blank; SIZE]; SIZE],
            current: Player::X,
        }
    }

    // === State access ===

    /// Whose turn it is. Always a token, never a marker.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Read a single cell.
    #[must_use]
    pub fn cell(&self, sq: Square) -> Player {
        self.grid[sq.row()][sq.col()]
    }

    /// Number of occupied (non-blank) cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        Square::all().filter(|&sq| self.cell(sq) != Player::Blank).count()
    }

    /// Whether no blank cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied_count() == SIZE * SIZE
    }

    // === Reset ===

    /// Set every cell to blank. The turn is left untouched.
    pub fn clear(&mut self) {
        self.grid = [[Player::Blank; SIZE]; SIZE];
    }

    /// Start a new game: blank grid, X to move.
    pub fn reset(&mut self) {
        self.clear();
        self.current = Player::X;
    }

    // === Move application ===

    /// Apply a sliding move for the current player.
    ///
    /// The new token enters at the lane's open end and every token
    /// before the first blank cell shifts one step toward the closed
    /// end. Returns `true` and passes the turn to the opponent on
    /// success; returns `false` and changes nothing (grid and turn)
    /// if the lane is full.
    pub fn submit_move(&mut self, mv: Move) -> bool {
        let Some(open) = self.first_blank(mv) else {
            debug!("move {mv} rejected: lane full");
            return false;
        };

        for i in (1..=open).rev() {
            let shifted = self.cell(mv.square_at(i - 1));
            self.set(mv.square_at(i), shifted);
        }
        self.set(mv.square_at(0), self.current);
        debug!("move {mv} accepted, filled {}", mv.square_at(open));

        self.current = self.current.opponent();
        true
    }

    /// Character-boundary form of [`Board::submit_move`]: parses
    /// '1'-'5' / 'A'-'E' and rejects anything else without touching
    /// state. `Ok(false)` is the normal full-lane outcome.
    pub fn submit_move_char(&mut self, c: char) -> Result<bool, ParseMoveError> {
        Ok(self.submit_move(Move::from_char(c)?))
    }

    // === Lookahead primitives ===

    /// Place `player`'s token in the lane's first blank cell, without
    /// the sliding cascade and without touching the turn. Silent
    /// no-op if the lane is full.
    ///
    /// This is the evaluation primitive, paired with
    /// [`Board::undo_move`]. It is intentionally not move-equivalent
    /// to [`Board::submit_move`].
    pub fn simulate_move(&mut self, mv: Move, player: Player) {
        assert!(player.is_token(), "can only simulate a token placement");
        if let Some(open) = self.first_blank(mv) {
            self.set(mv.square_at(open), player);
        }
    }

    /// Clear the occupied cell closest to the lane's closed end. No
    /// turn change; silent no-op on an all-blank lane.
    ///
    /// Reverses a [`Board::simulate_move`] on the same lane provided
    /// the lane's tokens form an unbroken run from the open end;
    /// with a hole in the lane, the cleared cell is not the
    /// simulated one.
    pub fn undo_move(&mut self, mv: Move) {
        for i in (0..SIZE).rev() {
            if self.cell(mv.square_at(i)) != Player::Blank {
                self.set(mv.square_at(i), Player::Blank);
                return;
            }
        }
    }

    /// Where [`Board::simulate_move`] would land: the first blank
    /// square along the lane, or `None` if the lane is full.
    #[must_use]
    pub fn landing_square(&self, mv: Move) -> Option<Square> {
        self.first_blank(mv).map(|i| mv.square_at(i))
    }

    /// The lanes that can still accept a token.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Move; 10]> {
        Move::all().filter(|&mv| self.first_blank(mv).is_some()).collect()
    }

    // === Terminal detection ===

    /// The winner, if any lane is uniformly one token.
    ///
    /// Checks rows A..E, then columns 1..5, then the main diagonal,
    /// then the anti-diagonal, returning the first match. The order
    /// is a fixed contract: under contrived states with several
    /// uniform lanes, the earliest checked one decides.
    #[must_use]
    pub fn check_for_win(&self) -> Player {
        for r in 0..SIZE {
            let owner = self.line_owner(|i| Square::new(r, i));
            if owner != Player::Blank {
                return owner;
            }
        }
        for c in 0..SIZE {
            let owner = self.line_owner(|i| Square::new(i, c));
            if owner != Player::Blank {
                return owner;
            }
        }
        let owner = self.line_owner(|i| Square::new(i, i));
        if owner != Player::Blank {
            return owner;
        }
        self.line_owner(|i| Square::new(i, SIZE - 1 - i))
    }

    /// Whether the board is full with no winner.
    #[must_use]
    pub fn check_for_tie(&self) -> bool {
        self.is_full() && self.check_for_win() == Player::Blank
    }

    /// Combined outcome poll.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let winner = self.check_for_win();
        if winner != Player::Blank {
            GameStatus::Won(winner)
        } else if self.is_full() {
            GameStatus::Tie
        } else {
            GameStatus::InProgress
        }
    }

    // === Internals ===

    fn set(&mut self, sq: Square, value: Player) {
        self.grid[sq.row()][sq.col()] = value;
    }

    /// Index of the first blank cell along the lane, counted from the
    /// insertion start.
    fn first_blank(&self, mv: Move) -> Option<usize> {
        (0..SIZE).find(|&i| self.cell(mv.square_at(i)) == Player::Blank)
    }

    /// The token owning all five cells of a line, or `Blank`.
    fn line_owner(&self, at: impl Fn(usize) -> Square) -> Player {
        let first = self.cell(at(0));
        if first == Player::Blank {
            return Player::Blank;
        }
        for i in 1..SIZE {
            if self.cell(at(i)) != first {
                return Player::Blank;
            }
        }
        first
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..SIZE {
            for c in 0..SIZE {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.grid[r][c])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
