//! Cell values and turn identity.
//!
//! ## Player
//!
//! A closed enum covering everything a cell or an outcome can be:
//! the two tokens (`X`, `O`), the empty cell (`Blank`), and the
//! tie outcome marker (`Tie`).
//!
//! `Tie` exists only so that outcome reporting can stay in the same
//! vocabulary as the grid; it is never stored in a cell. The board
//! upholds that invariant.

use serde::{Deserialize, Serialize};

/// A cell value or game outcome marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The X token.
    X,
    /// The O token.
    O,
    /// An empty cell; also "no winner" in outcome position.
    Blank,
    /// Tie outcome marker. Never a cell occupant.
    Tie,
}

impl Player {
    /// The other token. Identity on `Blank` and `Tie`.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
            other => other,
        }
    }

    /// Whether this is a playable token (`X` or `O`), as opposed to a
    /// blank cell or an outcome marker.
    #[must_use]
    pub const fn is_token(self) -> bool {
        matches!(self, Player::X | Player::O)
    }

    /// Single-character form used in board rendering: `X`, `O`,
    /// `.` for blank, `#` for the tie marker.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
            Player::Blank => '.',
            Player::Tie => '#',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
