//! Heuristic evaluation function for Bagh-Chal positions
//!
//! This module provides the static evaluation used at the leaves of the
//! minimax search. It evaluates board positions based on:
//! - Material: goats captured so far
//! - Mobility: steps and capture jumps available to the tigers
//! - Traps: tigers with no move left

use crate::board::{Board, Side};
use crate::rules::{is_tiger_trapped, tiger_mobility};

use super::{Jitter, Weights};

/// Evaluation score; higher is better for the evaluating side
pub type Score = f64;

/// Evaluate the board from the perspective of `side`.
///
/// All terms are computed in the tiger's favour and negated for the goat, so
/// apart from the perturbation `evaluate(b, Tiger) == -evaluate(b, Goat)`.
/// The perturbation drawn from `jitter` is always added, never negated.
///
/// # Arguments
/// * `board` - The position to score
/// * `side` - The side to evaluate for
/// * `goats_captured` - Goats captured so far in this line of play
/// * `jitter` - Tie-break source
#[must_use]
pub fn evaluate(board: &Board, side: Side, goats_captured: u8, jitter: &mut dyn Jitter) -> Score {
    let mut mobility = 0u32;
    let mut trapped = 0u32;

    for pos in board.pieces(Side::Tiger) {
        mobility += tiger_mobility(board, pos);
        if is_tiger_trapped(board, pos) {
            trapped += 1;
        }
    }

    let tiger_score = goats_captured as Score * Weights::TIGER_CAPTURE
        + trapped as Score * Weights::TIGER_TRAPPED
        + mobility as Score * Weights::TIGER_MOBILITY;

    let score = match side {
        Side::Tiger => tiger_score,
        Side::Goat => -tiger_score,
    };

    score + jitter.sample()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{NoJitter, RandomJitter};

    #[test]
    fn test_opening_position() {
        let board = Board::new();
        // 4 corners x 3 empty neighbours = 12 mobility
        assert_eq!(evaluate(&board, Side::Tiger, 0, &mut NoJitter), 120.0);
        assert_eq!(evaluate(&board, Side::Goat, 0, &mut NoJitter), -120.0);
    }

    #[test]
    fn test_material_dominates() {
        let board = Board::new();
        let base = evaluate(&board, Side::Tiger, 0, &mut NoJitter);
        let one_capture = evaluate(&board, Side::Tiger, 1, &mut NoJitter);
        assert_eq!(one_capture - base, 1000.0);

        let goat_view = evaluate(&board, Side::Goat, 2, &mut NoJitter);
        assert_eq!(goat_view, -(2000.0 + 120.0));
    }

    #[test]
    fn test_capture_counts_double_mobility() {
        let board = Board::from_rows(["T....", ".G...", ".....", ".....", "....."]).unwrap();
        // 2 steps + 1 capture (x2) = 4 mobility units
        assert_eq!(evaluate(&board, Side::Tiger, 0, &mut NoJitter), 40.0);
    }

    #[test]
    fn test_trapped_tigers_penalised() {
        let board = Board::from_rows(["TGGGT", "GG.GG", "G.GGG", "GGGGG", "TGGGT"]).unwrap();
        assert_eq!(evaluate(&board, Side::Tiger, 0, &mut NoJitter), -2000.0);
        assert_eq!(evaluate(&board, Side::Goat, 0, &mut NoJitter), 2000.0);
    }

    #[test]
    fn test_symmetric_without_jitter() {
        let board = Board::from_rows(["T.G.T", ".G...", "..G..", "...G.", "T...T"]).unwrap();
        for captured in 0..4 {
            let t = evaluate(&board, Side::Tiger, captured, &mut NoJitter);
            let g = evaluate(&board, Side::Goat, captured, &mut NoJitter);
            assert_eq!(t, -g);
        }
    }

    #[test]
    fn test_jitter_bounded() {
        let board = Board::new();
        let base = evaluate(&board, Side::Goat, 0, &mut NoJitter);
        let mut jitter = RandomJitter::seeded(3);
        for _ in 0..100 {
            let s = evaluate(&board, Side::Goat, 0, &mut jitter);
            assert!(s >= base && s < base + Weights::JITTER_MAX);
        }
    }
}
