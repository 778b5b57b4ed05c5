use super::*;

impl QuizApp {
    /// Vuelve a los valores iniciales y borra lo guardado.
    pub fn reset_progress(&mut self) {
        self.session.reset();
        self.toast.cancel();
        self.rebuild_input();

        self.pending_write = Some(PendingWrite::Clear);
        self.confirm_reset = false;
        self.show_completion = false;
        self.has_saved_progress = false;
        self.message.clear();
        log::info!("Progreso reiniciado");
    }

    pub fn empezar_desde_cero(&mut self) {
        self.reset_progress();
        self.continuar_quiz();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirm reset")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to erase all your progress? This can't be undone!");
                ui.horizontal(|ui| {
                    if ui.button("Yes, erase").clicked() {
                        self.empezar_desde_cero();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
