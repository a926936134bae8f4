//! Core engine types: cell values, move encoding, square addressing,
//! the board itself, and the static position-score table.
//!
//! Everything here is synchronous, allocation-free on the hot paths,
//! and owned by a single caller; there is no internal locking or
//! scheduling.

pub mod board;
pub mod moves;
pub mod player;
pub mod score;
pub mod square;

pub use board::{Board, GameStatus};
pub use moves::{Move, ParseMoveError};
pub use player::Player;
pub use score::{position_score, position_score_at, POSITION_SCORES};
pub use square::{ParseSquareError, Square, SIZE};
