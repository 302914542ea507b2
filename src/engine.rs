//! Main AI engine selecting moves for the scripted opponent
//!
//! This module provides the move-selection entry point used to drive the
//! non-human side. The strategy depends on the difficulty:
//!
//! 1. **Easy**: random legal move; a tiger always takes a capture if one exists
//! 2. **Medium**: alpha-beta minimax, 2 plies
//! 3. **Hard**: alpha-beta minimax, 4 plies
//!
//! # Example
//!
//! ```
//! use baghchal::{AIEngine, Board, Difficulty, Phase, Side};
//!
//! let mut engine = AIEngine::seeded(7);
//! let board = Board::new();
//!
//! let result = engine.select_move_with_stats(&board, Side::Goat, Phase::Placement, Difficulty::Medium, 0);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::{Board, Side};
use crate::config::Difficulty;
use crate::eval::{Jitter, NoJitter, RandomJitter, Score};
use crate::rules::{legal_moves, Move, Phase};
use crate::search::{Node, Searcher};

/// Strategy that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Uniform pick among all legal moves
    Random,
    /// Uniform pick among available captures (easy tiger)
    Capture,
    /// Alpha-beta minimax result
    AlphaBeta,
}

/// Result of a move selection with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Move chosen, `None` if the side has no legal move
    pub best_move: Option<Move>,
    /// Minimax score (0 for random strategies)
    pub score: Score,
    /// Strategy that chose the move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn picked(best_move: Option<Move>, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move,
            score: 0.0,
            search_type,
            time_ms,
            nodes: 0,
        }
    }
}

/// Main AI Engine for Bagh-Chal.
///
/// Owns the random generator for easy picks and the evaluator's tie-break
/// source. Both are injectable so play can be made reproducible.
///
/// # Example
///
/// ```
/// use baghchal::{AIEngine, Board, Difficulty, Phase, Side};
///
/// // No tie-break noise: same position always gives the same move
/// let mut engine = AIEngine::deterministic();
/// let board = Board::new();
/// let a = engine.select_move(&board, Side::Tiger, Phase::Placement, Difficulty::Medium, 0);
/// let b = engine.select_move(&board, Side::Tiger, Phase::Placement, Difficulty::Medium, 0);
/// assert_eq!(a, b);
/// ```
pub struct AIEngine {
    searcher: Searcher,
    rng: StdRng,
    jitter: Box<dyn Jitter + Send>,
}

impl AIEngine {
    /// Engine seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sources(StdRng::from_os_rng(), Box::new(RandomJitter::from_os_rng()))
    }

    /// Reproducible engine: same seed, same choices.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_sources(
            StdRng::seed_from_u64(seed),
            Box::new(RandomJitter::seeded(seed.wrapping_add(1))),
        )
    }

    /// Engine with the tie-break perturbation disabled.
    ///
    /// Medium and Hard become fully deterministic; Easy still draws from a
    /// fixed-seed generator.
    #[must_use]
    pub fn deterministic() -> Self {
        Self::with_sources(StdRng::seed_from_u64(0), Box::new(NoJitter))
    }

    /// Engine with explicit random sources.
    #[must_use]
    pub fn with_sources(rng: StdRng, jitter: Box<dyn Jitter + Send>) -> Self {
        Self {
            searcher: Searcher::new(),
            rng,
            jitter,
        }
    }

    /// Choose a move for `side`.
    ///
    /// Returns `None` only when `side` has no legal move.
    #[must_use]
    pub fn select_move(
        &mut self,
        board: &Board,
        side: Side,
        phase: Phase,
        difficulty: Difficulty,
        goats_captured: u8,
    ) -> Option<Move> {
        self.select_move_with_stats(board, side, phase, difficulty, goats_captured)
            .best_move
    }

    /// Choose a move for `side` and report how it was found.
    #[must_use]
    pub fn select_move_with_stats(
        &mut self,
        board: &Board,
        side: Side,
        phase: Phase,
        difficulty: Difficulty,
        goats_captured: u8,
    ) -> MoveResult {
        let start = Instant::now();

        let moves = legal_moves(board, side, phase);
        if moves.is_empty() {
            debug!("{side} has no legal move");
            return MoveResult::picked(None, SearchType::Random, 0);
        }

        match difficulty.search_depth() {
            0 => self.pick_random(&moves, side, start),
            depth => {
                let root = Node::new(*board, side, phase, goats_captured);
                let search = self.searcher.search(&root, depth, self.jitter.as_mut());
                debug!(
                    "{side} alpha-beta depth {}: {:?} score {:.1}, {} nodes, {} cutoffs",
                    search.depth,
                    search.best_move,
                    search.score,
                    search.nodes,
                    search.stats.cutoffs
                );
                MoveResult {
                    best_move: search.best_move,
                    score: search.score,
                    search_type: SearchType::AlphaBeta,
                    time_ms: start.elapsed().as_millis() as u64,
                    nodes: search.nodes,
                }
            }
        }
    }

    fn pick_random(&mut self, moves: &[Move], side: Side, start: Instant) -> MoveResult {
        if side == Side::Tiger {
            let captures: Vec<Move> = moves.iter().copied().filter(|m| m.is_jump()).collect();
            if let Some(&mv) = captures.choose(&mut self.rng) {
                debug!("{side} takes capture {mv} out of {}", captures.len());
                return MoveResult::picked(
                    Some(mv),
                    SearchType::Capture,
                    start.elapsed().as_millis() as u64,
                );
            }
        }

        MoveResult::picked(
            moves.choose(&mut self.rng).copied(),
            SearchType::Random,
            start.elapsed().as_millis() as u64,
        )
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.searcher.nodes()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
