//! Heuristic weights for Bagh-Chal evaluation
//!
//! All weights are expressed from the tiger's point of view; the evaluator
//! flips the sign for the goat side.

use super::Score;

/// Evaluation weights
pub struct Weights;

impl Weights {
    /// Value of one captured goat
    pub const TIGER_CAPTURE: Score = 1000.0;
    /// Penalty per trapped tiger
    pub const TIGER_TRAPPED: Score = -500.0;
    /// Value per unit of tiger mobility (a capture option is 2 units)
    pub const TIGER_MOBILITY: Score = 10.0;

    /// Score of a decided game inside the search
    pub const WIN: Score = 10_000.0;
    /// Upper bound (exclusive) of the tie-break perturbation
    pub const JITTER_MAX: Score = 5.0;
}
