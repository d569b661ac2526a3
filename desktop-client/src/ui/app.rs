use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::{Difficulty, TicTacToeSession};
use tictactoe_common::{debug_log, log};

use super::game::{render_board, status_message};
use crate::config::Config;

type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub struct TicTacToeApp {
    session: TicTacToeSession,
    config_manager: ClientConfigManager,
    difficulty: Difficulty,
    // Drives the delayed computer moves; dropped with the window.
    _runtime: tokio::runtime::Runtime,
}

impl TicTacToeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        session: TicTacToeSession,
        config_manager: ClientConfigManager,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        let ctx = cc.egui_ctx.clone();
        session.set_update_listener(move || ctx.request_repaint());

        Self {
            difficulty: session.difficulty(),
            session,
            config_manager,
            _runtime: runtime,
        }
    }

    fn on_difficulty_changed(&mut self) {
        self.session.set_difficulty(self.difficulty);

        let difficulty = self.difficulty;
        if let Err(e) = self
            .config_manager
            .update_config(|config| config.game.difficulty = difficulty)
        {
            log!("Failed to save difficulty: {}", e);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let previous = self.difficulty;
            egui::ComboBox::from_label("Difficulty")
                .selected_text(self.difficulty.to_string())
                .show_ui(ui, |ui| {
                    for difficulty in Difficulty::ALL {
                        let label = difficulty.to_string();
                        ui.selectable_value(&mut self.difficulty, difficulty, label);
                    }
                });
            if self.difficulty != previous {
                self.on_difficulty_changed();
            }

            ui.separator();

            if ui.button("New game").clicked() {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.session.snapshot();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_controls(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(status_message(&snapshot));
                ui.add_space(12.0);

                if let Some(index) = render_board(ui, &snapshot)
                    && let Err(e) = self.session.place_human_mark(index)
                {
                    debug_log!("Click on cell {} ignored: {}", index, e);
                }
            });
        });
    }
}
