//! Theme constants for the Bagh-Chal GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(214, 190, 140);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 50, 30);

// Pieces
pub const TIGER_FILL: Color32 = Color32::from_rgb(230, 126, 34);
pub const TEXT_ON_TIGER: Color32 = Color32::from_rgb(30, 20, 10);
pub const GOAT_FILL: Color32 = Color32::from_rgb(245, 245, 240);
pub const TEXT_ON_GOAT: Color32 = Color32::from_rgb(60, 60, 60);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const SELECTION: Color32 = Color32::from_rgb(50, 120, 220);
pub const TARGET: Color32 = Color32::from_rgb(50, 180, 90);

pub fn hover_color() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 70)
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(80, 200, 120);
pub const WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.28;
pub const POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
