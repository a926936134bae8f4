//! Cell addressing.
//!
//! Rows are lettered 'A'..'E' top to bottom, columns are numbered
//! '1'..'5' left to right, so a square displays as e.g. "C3".

use serde::{Deserialize, Serialize};

/// Board dimension: the grid is `SIZE` x `SIZE`.
pub const SIZE: usize = 5;

/// A (row, column) cell address, both 0-indexed and in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from 0-indexed coordinates.
    ///
    /// Panics if either coordinate is out of range; use
    /// [`Square::from_chars`] for untrusted input.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < SIZE, "row out of range");
        assert!(col < SIZE, "col out of range");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Parse the character pair ('A'..'E', '1'..'5').
    ///
    /// This is the boundary form used for score lookups; anything
    /// outside the two ranges is rejected.
    pub fn from_chars(row: char, col: char) -> Result<Self, ParseSquareError> {
        if !('A'..='E').contains(&row) || !('1'..='5').contains(&col) {
            return Err(ParseSquareError { row, col });
        }
        Ok(Self {
            row: (row as u8) - b'A',
            col: (col as u8) - b'1',
        })
    }

    /// 0-indexed row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// 0-indexed column.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row letter, 'A'..'E'.
    #[must_use]
    pub const fn row_char(self) -> char {
        (b'A' + self.row) as char
    }

    /// Column digit, '1'..'5'.
    #[must_use]
    pub const fn col_char(self) -> char {
        (b'1' + self.col) as char
    }

    /// Iterate over all squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SIZE).flat_map(|r| (0..SIZE).map(move |c| Square::new(r, c)))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row_char(), self.col_char())
    }
}

/// A row/column character pair outside 'A'..'E' x '1'..'5'.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseSquareError {
    /// The offending row character.
    pub row: char,
    /// The offending column character.
    pub col: char,
}

impl std::fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid square {:?}{:?}: expected row 'A'-'E' and column '1'-'5'",
            self.row, self.col
        )
    }
}

impl std::error::Error for ParseSquareError {}
