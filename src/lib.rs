//! Bagh-Chal (Tigers and Goats) rules engine and AI
//!
//! A two-player asymmetric strategy game on a 5x5 point grid:
//! - 4 tigers start on the corners, 20 goats enter one at a time
//! - Every point connects to all 8 neighbours, diagonals included
//! - Tigers capture by jumping a goat in a straight line onto an empty point
//! - Tigers win by capturing enough goats; goats win by leaving every tiger
//!   without a move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and the static adjacency table
//! - [`rules`]: Move generation, capture, win detection
//! - [`eval`]: Position evaluation with injectable tie-break noise
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI move selection per difficulty
//! - [`config`]: Match configuration and difficulty tables
//! - [`game`]: Match controller with turn/phase state and bounded undo
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use baghchal::{AIEngine, Difficulty, Match, MatchConfig, Pos, Side};
//!
//! let config = MatchConfig::vs_ai(Side::Goat, Difficulty::Medium);
//! let mut game = Match::new(config);
//! let mut engine = AIEngine::seeded(42);
//!
//! // Human places a goat in the centre
//! game.play(None, Pos::new(2, 2)).unwrap();
//!
//! // AI answers as the tigers
//! if let Some(mv) = engine.select_move(
//!     game.board(),
//!     game.turn(),
//!     game.phase(),
//!     config.difficulty,
//!     game.goats_captured(),
//! ) {
//!     game.apply(mv).unwrap();
//!     println!("AI plays {mv}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, Side, BOARD_SIZE};
pub use config::{Difficulty, GameMode, MatchConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use game::{GameError, Match, MatchOutcome, MoveOutcome};
pub use rules::{Move, Phase, TOTAL_GOATS};
