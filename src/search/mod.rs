//! Search module for Bagh-Chal AI
//!
//! Contains:
//! - Immutable search nodes that advance turn, phase and capture count
//! - Depth-limited minimax with alpha-beta pruning

pub mod alphabeta;

pub use alphabeta::{Node, SearchResult, SearchStats, Searcher, SEARCH_CAPTURE_WIN};
