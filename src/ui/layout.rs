use crate::QuizApp;
use egui::{Align2, Button, Context, RichText, Ui, Visuals};
use std::time::Duration;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🏠 Home").clicked() {
                app.volver_al_inicio();
            }
            if ui.button("🏅 Achievements").clicked() {
                app.ver_resumen();
            }
            if ui.button("🔄 Reset progress").clicked() {
                app.confirm_reset = true;
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(ui: &mut Ui, panel_width: f32, left_label: &str, right_label: &str) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui.add_sized([btn_w, 36.0], Button::new(left_label)).clicked();
        clicked_right = ui.add_sized([btn_w, 36.0], Button::new(right_label)).clicked();
    });
    (clicked_left, clicked_right)
}

/// Aviso de logro en la esquina. Se cierra solo al caducar.
pub fn achievement_toast(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let Some(toast) = app.toast.active(now) else {
        return;
    };
    let info = toast.achievement.info();

    egui::Window::new("achievement_toast")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(Align2::RIGHT_TOP, [-16.0, 48.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(format!("{} Achievement unlocked!", info.icon)).strong());
            ui.label(RichText::new(info.title).heading());
            ui.label(info.description);
        });

    if let Some(remaining) = app.toast.remaining(now) {
        ctx.request_repaint_after(Duration::from_secs_f64(remaining));
    }
}

pub fn completion_window(app: &mut QuizApp, ctx: &Context) {
    egui::Window::new("🎉 Challenge complete")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("You made it through all 30 days!");
            ui.label(format!(
                "Final score: {}  ·  Best streak: {}",
                app.session.score(),
                app.session.highest_streak()
            ));
            ui.add_space(8.0);
            if ui.button("See summary").clicked() {
                app.ver_resumen();
            }
        });
}
