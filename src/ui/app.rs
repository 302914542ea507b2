//! Main application for the Bagh-Chal GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::GameSession;
use super::theme::*;
use crate::{Difficulty, GameMode, MatchConfig, Side, TOTAL_GOATS};

/// Main Bagh-Chal application
pub struct BaghChalApp {
    session: GameSession,
    board_view: BoardView,
    difficulty: Difficulty,
    show_debug: bool,
}

impl Default for BaghChalApp {
    fn default() -> Self {
        let config = MatchConfig::default();
        Self {
            session: GameSession::new(config),
            board_view: BoardView::default(),
            difficulty: config.difficulty,
            show_debug: false,
        }
    }
}

impl BaghChalApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn start(&mut self, mode: GameMode, side: Side) {
        self.session
            .new_game(MatchConfig::new(mode, side, self.difficulty));
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI - Goats)").clicked() {
                        self.start(GameMode::Ai, Side::Goat);
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI - Tigers)").clicked() {
                        self.start(GameMode::Ai, Side::Tiger);
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.start(GameMode::Pvp, Side::Goat);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for difficulty in Difficulty::ALL {
                        ui.radio_value(&mut self.difficulty, difficulty, difficulty.to_string());
                    }
                    ui.label(RichText::new("Applies to the next game").size(10.0).color(TEXT_MUTED));
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.session.config();
                    let mode_text = match config.mode {
                        GameMode::Ai => format!("vs AI ({}) - You: {}", config.difficulty, config.side),
                        GameMode::Pvp => format!("PvP ({})", config.difficulty),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with match info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("BAGH-CHAL").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("Tigers and Goats").size(11.0).color(TEXT_MUTED));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_counts_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let color = if self.session.game.is_over() {
                WIN_HIGHLIGHT
            } else {
                TEXT_PRIMARY
            };
            ui.label(RichText::new(self.session.status_text()).size(18.0).strong().color(color));
            ui.label(
                RichText::new(format!("{} phase", self.session.game.phase()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(11.0)
                        .color(WARNING),
                );
            }
        });
    }

    /// Captures against the threshold, goats still to place, herd size
    fn render_counts_card(&self, ui: &mut egui::Ui) {
        let game = &self.session.game;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("GOATS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let captured = game.goats_captured();
            let threshold = game.win_capture_count();
            let danger = captured + 1 >= threshold;
            ui.label(
                RichText::new(format!("Eaten: {captured}/{threshold}"))
                    .size(14.0)
                    .color(if danger { WARNING } else { TEXT_PRIMARY }),
            );
            ui.label(
                RichText::new(format!("To place: {}", TOTAL_GOATS - game.goats_placed()))
                    .size(12.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!("Herd: {}", game.goats_on_board()))
                    .size(12.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let game = &self.session.game;
                if game.config().undo_allowed() && !game.is_over() {
                    let label = format!("Undo ({})", game.undo_remaining());
                    let undo = ui.add_enabled(self.session.can_undo(), egui::Button::new(label));
                    if undo.clicked() {
                        self.session.undo();
                    }
                }
                if ui.button("New Game").clicked() {
                    self.session.reset();
                }
            });
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.session.last_ai_result {
                Some(result) => {
                    ui.label(
                        RichText::new(format!("{:?}", result.search_type))
                            .size(11.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                    ui.label(
                        RichText::new(format!(
                            "Score: {:.1}  {}ms  {} nodes",
                            result.score, result.time_ms, result.nodes
                        ))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                    );
                    if let Some(mv) = result.best_move {
                        ui.label(RichText::new(mv.to_string()).size(12.0).color(TEXT_PRIMARY));
                    }
                }
                None => {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let targets = self.session.targets();
            let overlay = BoardOverlay {
                selected: self.session.selected,
                targets: &targets,
                last_move: self.session.last_move,
                interactive: self.session.is_human_turn() && !self.session.is_ai_thinking(),
            };

            if let Some(pos) = self.board_view.show(ui, self.session.game.board(), overlay) {
                self.session.click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.session.undo();
        }
        if new_game {
            self.session.reset();
        }
    }
}

impl eframe::App for BaghChalApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();
        self.session.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
