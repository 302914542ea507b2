//! Board rendering for the Bagh-Chal GUI

use crate::board::neighbors;
use crate::{Board, Cell, Move, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board needs to know about the session to draw overlays
pub struct BoardOverlay<'a> {
    pub selected: Option<Pos>,
    pub targets: &'a [Pos],
    pub last_move: Option<Move>,
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Distance between two adjacent points
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked point, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_lines(&painter);

        if let Some(mv) = overlay.last_move {
            self.draw_last_move(&painter, mv);
        }
        for &pos in overlay.targets {
            self.draw_target(&painter, pos);
        }
        self.draw_pieces(&painter, board);
        if let Some(pos) = overlay.selected {
            self.draw_selection(&painter, pos);
        }

        if !overlay.interactive {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_board(pointer)?;
        painter.circle_filled(self.board_to_screen(pos), self.piece_radius(), hover_color());

        if response.clicked() {
            Some(pos)
        } else {
            None
        }
    }

    /// Draw every connection of the 8-neighbour grid once
    fn draw_lines(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);

        for pos in Pos::all() {
            for &n in neighbors(pos) {
                if n > pos {
                    painter.line_segment([self.board_to_screen(pos), self.board_to_screen(n)], stroke);
                }
            }
            painter.circle_filled(self.board_to_screen(pos), POINT_RADIUS, GRID_LINE);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            match board.get(pos) {
                Cell::Empty => {}
                cell => self.draw_piece(painter, pos, cell),
            }
        }
    }

    fn draw_piece(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.piece_radius();
        let (fill, label_color) = match cell {
            Cell::Tiger => (TIGER_FILL, TEXT_ON_TIGER),
            Cell::Goat => (GOAT_FILL, TEXT_ON_GOAT),
            Cell::Empty => return,
        };

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, fill);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            cell.symbol(),
            egui::FontId::proportional(radius),
            label_color,
        );
    }

    fn draw_selection(&self, painter: &Painter, pos: Pos) {
        let stroke = Stroke::new(3.0, SELECTION);
        painter.circle_stroke(self.board_to_screen(pos), self.piece_radius() + 4.0, stroke);
    }

    fn draw_target(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), self.piece_radius() * 0.35, TARGET);
    }

    /// Path of the last move, plus a marker on the destination
    fn draw_last_move(&self, painter: &Painter, mv: Move) {
        let to = self.board_to_screen(mv.to());
        if let Some(from) = mv.from() {
            painter.line_segment([self.board_to_screen(from), to], Stroke::new(4.0, LAST_MOVE_MARKER));
        }
        painter.circle_stroke(to, self.piece_radius() + 2.0, Stroke::new(2.0, LAST_MOVE_MARKER));
    }

    fn piece_radius(&self) -> f32 {
        self.cell_size * PIECE_RADIUS_RATIO
    }

    /// Convert screen coordinates to the nearest board point
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert a board point to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
