//! Main application for the Renju GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::{Color, EngineConfig, GameStatus};

/// Main Renju application
pub struct RenjuApp {
    state: GameState,
    board_view: BoardView,
}

impl RenjuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
        }
    }

    /// Open the app on a replayed record
    pub fn with_record(cc: &eframe::CreationContext<'_>, config: EngineConfig, record: String) -> Self {
        let mut app = Self::new(cc, config);
        app.state.record_text = record;
        app.state.restore_record();
        app
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Clear (N)").clicked() {
                        self.state.clear();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Redo (R)").clicked() {
                        self.state.redo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.state.game.config();
                    ui.label(format!("{:?} rules, {:?} end", config.rule_set, config.end_policy));
                });
            });
        });
    }

    /// Render the side panel with game info and controls
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_history_card(ui);
                ui.add_space(10.0);
                self.render_record_card(ui);

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn button(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
        let color = if enabled { TEXT_PRIMARY } else { TEXT_MUTED };
        let mut clicked = false;
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                let label = egui::Label::new(RichText::new(text).size(12.0).color(color)).sense(egui::Sense::click());
                clicked = ui.add(label).clicked() && enabled;
            });
        clicked
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("RENJU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Side to move, or the result once the game is over
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let snap = self.state.snapshot();
        Self::card_frame().show(ui, |ui| {
            let (color, status, accent) = match snap.status {
                GameStatus::InProgress => (snap.next_color(), "to play".to_string(), STATUS_OK),
                GameStatus::Ended { winner, reason } => (winner, format!("wins by {}", reason), WIN_HIGHLIGHT),
            };
            let (stone_char, fill) = match color {
                Color::Black => ("●", BLACK_STONE),
                Color::White => ("○", WHITE_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(20.0),
                    TEXT_MUTED,
                );
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(color.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(status).size(12.0).color(accent));
                });
            });

            ui.add_space(6.0);
            let forbidden = snap.board.forbidden_count();
            if forbidden > 0 {
                ui.label(
                    RichText::new(format!("{} forbidden cell(s) for black", forbidden))
                        .size(11.0)
                        .color(STATUS_WARNING),
                );
            }
        });
    }

    /// Undo/redo controls
    fn render_history_card(&mut self, ui: &mut egui::Ui) {
        let can_undo = self.state.game.history().can_undo();
        let can_redo = self.state.game.history().can_redo();

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::button(ui, "⏮", can_undo) {
                    self.state.undo_all();
                }
                if Self::button(ui, "◀", can_undo) {
                    self.state.undo();
                }
                if Self::button(ui, "▶", can_redo) {
                    self.state.redo();
                }
                if Self::button(ui, "⏭", can_redo) {
                    self.state.redo_all();
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let snap = self.state.snapshot();
                ui.label(RichText::new(format!("Move #{}", snap.counter)).size(11.0).color(TEXT_SECONDARY));
                if Self::button(ui, "Clear", true) {
                    self.state.clear();
                }
            });
        });
    }

    /// Save/restore of the JSON record
    fn render_record_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("RECORD").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.add(
                egui::TextEdit::multiline(&mut self.state.record_text)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY)
                    .hint_text(r#"[{"x":7,"y":7}, ...]"#),
            );
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if Self::button(ui, "Save", true) {
                    self.state.save_record();
                    ui.ctx().copy_text(self.state.record_text.clone());
                }
                let has_text = !self.state.record_text.trim().is_empty();
                if Self::button(ui, "Restore", has_text) {
                    self.state.restore_record();
                }
            });
        });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let winning_line = self.state.winning_line();
            let accepts_moves = self.state.accepts_moves();
            let clicked = self.board_view.show(
                ui,
                self.state.snapshot(),
                winning_line.as_deref(),
                accepts_moves,
            );

            if let Some(pos) = clicked {
                self.state.try_place_stone(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // keep shortcuts out of the record text box
        if ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::R) {
                self.state.redo();
            }
            if i.key_pressed(egui::Key::Home) {
                self.state.undo_all();
            }
            if i.key_pressed(egui::Key::End) {
                self.state.redo_all();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.clear();
            }
        });
    }
}

impl eframe::App for RenjuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
