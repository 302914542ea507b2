//! GUI module for the Bagh-Chal game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::BaghChalApp;
pub use game_state::{AiState, GameSession, AI_MOVE_DELAY};
