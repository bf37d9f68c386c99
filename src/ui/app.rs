//! Main application for the Gomoku GUI

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::config::{AppConfig, StartMode};
use crate::Stone;
use super::board_view::{coordinate_label, BoardView};
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl GomokuApp {
    /// Create the app with the mode and AI delay from `config`
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self {
            state: GameState::with_ai_delay(
                Self::start_mode(config),
                Duration::from_millis(config.ai_delay_ms),
            ),
            board_view: BoardView::default(),
        }
    }

    fn start_mode(config: &AppConfig) -> GameMode {
        match config.start_mode {
            StartMode::VsAi => GameMode::VsAi {
                human_color: config.human_color.into(),
            },
            StartMode::Hotseat => GameMode::Hotseat,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI - Black)").clicked() {
                        self.state.set_mode(GameMode::VsAi { human_color: Stone::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI - White)").clicked() {
                        self.state.set_mode(GameMode::VsAi { human_color: Stone::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Hotseat)").clicked() {
                        self.state.set_mode(GameMode::Hotseat);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Reset (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::VsAi { human_color } => format!("vs AI - You: {}", human_color.name()),
                        GameMode::Hotseat => "Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_mode_card(ui);
                ui.add_space(10.0);

                self.render_history_card(ui);
                ui.add_space(10.0);

                self.render_ai_card(ui);

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    self.render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row, 15x15").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Whose turn it is, or how the game ended
    fn status_line(&self) -> (String, egui::Color32) {
        if let Some(result) = self.state.game_over {
            return match result {
                GameResult::Win { winner, .. } => (format!("{} wins", winner.name()), WIN_HIGHLIGHT),
                GameResult::Draw => ("Draw".to_string(), TEXT_SECONDARY),
            };
        }
        if let Some(elapsed) = self.state.ai_thinking_elapsed() {
            return (
                format!("AI thinking... {:.1}s", elapsed.as_secs_f32()),
                STATUS_THINKING,
            );
        }
        if self.state.ai_error.is_some() {
            return ("AI unavailable".to_string(), TEXT_MUTED);
        }
        match self.state.mode {
            GameMode::VsAi { .. } => ("Your turn".to_string(), STATUS_READY),
            GameMode::Hotseat => (format!("{} to move", self.state.current_turn.name()), STATUS_READY),
        }
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Stone::Black;
            let (stone_color, label_color) = if is_black {
                (BLACK_STONE, TEXT_PRIMARY)
            } else {
                (WHITE_STONE, WHITE_STONE_SHADOW)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, stone_color);
                ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(1.0, TEXT_MUTED));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = self.state.current_turn.name().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(label_color));

                    let (status, color) = self.status_line();
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Mode buttons; each one starts a fresh game
    fn render_mode_card(&mut self, ui: &mut egui::Ui) {
        let current = self.state.mode;
        let mut selected = None;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MODE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let options = [
                ("vs AI (Black)", GameMode::VsAi { human_color: Stone::Black }),
                ("vs AI (White)", GameMode::VsAi { human_color: Stone::White }),
                ("Hotseat", GameMode::Hotseat),
            ];

            for (label, mode) in options {
                let fill = if mode == current { BUTTON_ACTIVE } else { BUTTON_BG };
                let button = egui::Button::new(RichText::new(label).size(12.0).color(TEXT_PRIMARY))
                    .fill(fill)
                    .corner_radius(CornerRadius::same(6))
                    .min_size(Vec2::new(ui.available_width(), 26.0));
                if ui.add(button).clicked() {
                    selected = Some(mode);
                }
                ui.add_space(4.0);
            }
        });

        if let Some(mode) = selected {
            self.state.set_mode(mode);
        }
    }

    fn render_history_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let count = self.state.move_history.len();
                    ui.label(RichText::new(format!("#{count}")).size(10.0).color(TEXT_SECONDARY));
                });
            });
            ui.add_space(6.0);

            egui::ScrollArea::vertical()
                .max_height(180.0)
                .stick_to_bottom(true)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    if self.state.move_history.is_empty() {
                        ui.label(RichText::new("No moves yet").size(11.0).color(TEXT_MUTED));
                    }
                    for (i, (pos, stone)) in self.state.move_history.iter().enumerate() {
                        let symbol = if *stone == Stone::Black { "●" } else { "○" };
                        let text = format!("{:>3}. {symbol} {}", i + 1, coordinate_label(*pos));
                        ui.label(RichText::new(text).size(11.0).monospace().color(TEXT_PRIMARY));
                    }
                });
        });
    }

    /// Statistics of the last automated move
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        if self.state.mode == GameMode::Hotseat {
            return;
        }

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(STATUS_READY));
                    ui.label(RichText::new(format!("Score: {:.1}", result.score)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}us", result.time_us)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} cells", result.candidates)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("→ {}", coordinate_label(result.best_move)))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
        });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(STATUS_ERROR)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Modal shown once when the game ends
    fn render_result_dialog(&mut self, ctx: &Context) {
        let Some(result) = self.state.game_over else {
            return;
        };
        if !self.state.show_result_dialog {
            return;
        }

        let (headline, detail) = match result {
            GameResult::Win { winner, .. } => {
                let detail = match self.state.mode {
                    GameMode::VsAi { human_color } if human_color == winner => "You win!".to_string(),
                    GameMode::VsAi { .. } => "The AI wins.".to_string(),
                    GameMode::Hotseat => format!("{} wins!", winner.name()),
                };
                (format!("{} made five in a row", winner.name()), detail)
            }
            GameResult::Draw => ("The board is full".to_string(), "Draw.".to_string()),
        };

        let mut play_again = false;
        let mut keep_watching = false;

        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(detail).size(20.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(4.0);
                    ui.label(RichText::new(headline).size(12.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!("{} moves", self.state.move_history.len()))
                            .size(11.0)
                            .color(TEXT_MUTED),
                    );
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        play_again = ui.button("Play again").clicked();
                        keep_watching = ui.button("Keep watching").clicked();
                    });
                });
            });

        if play_again {
            self.state.reset();
        } else if keep_watching {
            self.state.show_result_dialog = false;
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let interactive = self.state.game_over.is_none()
                && self.state.is_human_turn()
                && !self.state.is_ai_thinking();
            let winning_line = self.state.game_over.and_then(|r| r.winning_line());

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                winning_line,
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place_stone(pos) {
                    log::warn!("rejected placement at {pos}: {err}");
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let new_game = ctx.input(|i| i.key_pressed(egui::Key::N));
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_result_dialog(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
