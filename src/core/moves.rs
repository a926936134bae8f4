//! Move representation: which lane a token is pushed into.
//!
//! A move selects one of the ten lanes:
//! - `Row(r)`, encoded 'A'..'E': insert at the left edge, tokens
//!   slide right.
//! - `Col(c)`, encoded '1'..'5': insert at the top edge, tokens
//!   slide down.
//!
//! The character encoding is the boundary form the UI layer feeds in;
//! everything else in the crate works with the typed form. Any other
//! character is rejected with [`ParseMoveError`].

use serde::{Deserialize, Serialize};

use super::square::{Square, SIZE};

/// A lane selection: push into a row from the left, or into a
/// column from the top.
///
/// Indices are 0-based and always in range when constructed through
/// [`Move::row`], [`Move::col`] or [`Move::from_char`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Push into row `r` (0 = 'A'), sliding rightward.
    Row(u8),
    /// Push into column `c` (0 = '1'), sliding downward.
    Col(u8),
}

impl Move {
    /// Row move from a 0-indexed row. Panics if out of range.
    #[must_use]
    pub fn row(r: usize) -> Self {
        assert!(r < SIZE, "row out of range");
        Move::Row(r as u8)
    }

    /// Column move from a 0-indexed column. Panics if out of range.
    #[must_use]
    pub fn col(c: usize) -> Self {
        assert!(c < SIZE, "col out of range");
        Move::Col(c as u8)
    }

    /// Parse the boundary encoding: '1'-'5' for columns, 'A'-'E'
    /// for rows.
    pub fn from_char(c: char) -> Result<Self, ParseMoveError> {
        match c {
            '1'..='5' => Ok(Move::Col((c as u8) - b'1')),
            'A'..='E' => Ok(Move::Row((c as u8) - b'A')),
            other => Err(ParseMoveError(other)),
        }
    }

    /// The boundary encoding of this move.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Move::Row(r) => (b'A' + r) as char,
            Move::Col(c) => (b'1' + c) as char,
        }
    }

    /// The square at position `i` along this lane, counted from the
    /// insertion start (left edge for rows, top edge for columns).
    #[must_use]
    pub fn square_at(self, i: usize) -> Square {
        match self {
            Move::Row(r) => Square::new(r as usize, i),
            Move::Col(c) => Square::new(i, c as usize),
        }
    }

    /// Iterate over all ten moves: rows 'A'..'E', then columns
    /// '1'..'5'.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE as u8).map(Move::Row).chain((0..SIZE as u8).map(Move::Col))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A move character outside '1'-'5' / 'A'-'E'.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseMoveError(pub char);

impl std::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid move {:?}: expected '1'-'5' (column) or 'A'-'E' (row)",
            self.0
        )
    }
}

impl std::error::Error for ParseMoveError {}
