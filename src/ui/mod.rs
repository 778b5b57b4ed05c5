mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame, Storage};
use egui::Context;
use layout::{achievement_toast, bottom_panel, completion_window, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // BOTONES SUPERIORES (solo durante el quiz y el resumen)
        if matches!(self.state, AppState::Quiz | AppState::Summary) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary_view(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
        if self.show_completion {
            completion_window(self, ctx);
        }
        achievement_toast(self, ctx);

        // Cada cambio de la sesión se guarda en el mismo frame
        if self.pending_write.is_some() {
            if let Some(storage) = frame.storage_mut() {
                self.flush_progress(storage);
            }
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.save_progress(storage);
    }
}
