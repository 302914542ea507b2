//! Evaluation module for Bagh-Chal positions
//!
//! This module provides static scoring of a board from one side's view.
//! The evaluation considers:
//! - Material (goats already captured)
//! - Tiger mobility, with capture options counted double
//! - Trapped tigers
//! - A small injectable perturbation for tie-breaking

pub mod heuristic;
pub mod jitter;
pub mod weights;

pub use heuristic::{evaluate, Score};
pub use jitter::{Jitter, NoJitter, RandomJitter};
pub use weights::Weights;
