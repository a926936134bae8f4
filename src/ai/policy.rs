//! Move policies built on the engine's lookahead primitives.
//!
//! Policies are trait-based so a caller can swap difficulty levels:
//! - `RandomPolicy`: uniform over playable lanes
//! - `GreedyPolicy`: one-ply evaluation against the position table
//!
//! Candidates are probed with `simulate_move` on a scratch copy of
//! the board: `undo_move` only reverses a simulate on a lane whose
//! tokens form an unbroken run from the open end, and mid-game
//! boards routinely have holes punched by crossing lanes.

use crate::core::{position_score, Board, Move, Player};

use super::rng::AiRng;

/// Flat score added when a simulated placement wins outright.
/// Large enough to dominate any position-table sum.
const WIN_BONUS: i32 = 100;

/// Policy for choosing the next move.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `player`, or `None` when every lane is
    /// full. Never mutates the board.
    fn choose(&self, board: &Board, player: Player, rng: &mut AiRng) -> Option<Move>;
}

/// Uniform random choice among playable lanes.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, board: &Board, _player: Player, rng: &mut AiRng) -> Option<Move> {
        rng.pick(&board.legal_moves()).copied()
    }
}

/// One-ply greedy evaluation.
///
/// Each candidate is scored as the strategic weight of its landing
/// square, plus [`WIN_BONUS`] when simulating the placement
/// completes five in a line for `player`. Ties among the best
/// candidates are broken uniformly at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl MovePolicy for GreedyPolicy {
    fn choose(&self, board: &Board, player: Player, rng: &mut AiRng) -> Option<Move> {
        let mut best_score = i32::MIN;
        let mut best: Vec<Move> = Vec::new();

        for mv in board.legal_moves() {
            // legal_moves guarantees a landing square exists
            let Some(landing) = board.landing_square(mv) else {
                continue;
            };

            let mut score = position_score(landing);
            let mut probe = board.clone();
            probe.simulate_move(mv, player);
            if probe.check_for_win() == player {
                score += WIN_BONUS;
            }

            if score > best_score {
                best_score = score;
                best.clear();
                best.push(mv);
            } else if score == best_score {
                best.push(mv);
            }
        }

        rng.pick(&best).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Square;

    #[test]
    fn test_random_policy_returns_legal_move() {
        let mut board = Board::new();
        board.submit_move(Move::row(0));
        let mut rng = AiRng::new(42);
        let mv = RandomPolicy.choose(&board, Player::O, &mut rng).unwrap();
        assert!(board.legal_moves().contains(&mv));
    }

    #[test]
    fn test_policies_none_on_full_board() {
        let mut board = Board::new();
        for sq in Square::all() {
            let token = if (sq.row() + sq.col()) % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            board.simulate_move(Move::col(sq.col()), token);
        }
        assert!(board.is_full());

        let mut rng = AiRng::new(0);
        assert_eq!(RandomPolicy.choose(&board, Player::X, &mut rng), None);
        assert_eq!(GreedyPolicy.choose(&board, Player::X, &mut rng), None);
    }

    #[test]
    fn test_greedy_prefers_center_landing() {
        let mut board = Board::new();
        // Column 3 already holds two tokens, so its landing square is
        // the center (weight 5); every other lane lands on weight 3
        // at best.
        board.simulate_move(Move::col(2), Player::O);
        board.simulate_move(Move::col(2), Player::X);

        let mut rng = AiRng::new(5);
        let mv = GreedyPolicy.choose(&board, Player::X, &mut rng).unwrap();
        assert_eq!(mv, Move::col(2));
    }

    #[test]
    fn test_greedy_takes_the_win() {
        let mut board = Board::new();
        for c in 0..4 {
            board.simulate_move(Move::col(c), Player::X);
        }

        let mut rng = AiRng::new(11);
        let mv = GreedyPolicy.choose(&board, Player::X, &mut rng).unwrap();
        board.simulate_move(mv, Player::X);
        assert_eq!(board.check_for_win(), Player::X);
    }

    #[test]
    fn test_greedy_scores_lanes_with_holes() {
        let mut board = Board::new();
        // A row push leaves the cell above it blank: column 1 now has
        // a hole at its open end. Probing must not disturb the board.
        board.submit_move(Move::row(1));
        let snapshot = board.clone();

        let mut rng = AiRng::new(3);
        let mv = GreedyPolicy.choose(&board, Player::O, &mut rng).unwrap();
        assert_eq!(board, snapshot);
        assert!(board.legal_moves().contains(&mv));
    }

    #[test]
    fn test_greedy_deterministic_for_seed() {
        let board = Board::new();
        let a = GreedyPolicy.choose(&board, Player::X, &mut AiRng::new(21));
        let b = GreedyPolicy.choose(&board, Player::X, &mut AiRng::new(21));
        assert_eq!(a, b);
    }
}
