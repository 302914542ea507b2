//! Game rules for Bagh-Chal
//!
//! This module implements the rule set both human input and the AI obey:
//! - Move generation for placement and movement
//! - Capture jumps and pure move application
//! - Trap detection and win conditions

pub mod capture;
pub mod moves;
pub mod win;

use std::fmt;

// Re-exports for convenient access
pub use capture::{apply_move, capture_landing, jump_midpoint};
pub use moves::{legal_moves, moves_from, Move};
pub use win::{all_tigers_trapped, check_winner, is_tiger_trapped, tiger_mobility};

/// Total number of goats that can ever be placed in one match
pub const TOTAL_GOATS: u8 = 20;

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Goats are still being added to the board
    #[default]
    Placement,
    /// All goats placed; both sides move existing pieces
    Movement,
}

impl Phase {
    /// Phase after `goats_placed` goats have entered the board.
    ///
    /// The switch to `Movement` is one-way.
    #[inline]
    pub fn after_placements(self, goats_placed: u8) -> Phase {
        if goats_placed >= TOTAL_GOATS {
            Phase::Movement
        } else {
            self
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placement => write!(f, "Placement"),
            Phase::Movement => write!(f, "Movement"),
        }
    }
}
