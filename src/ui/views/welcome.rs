use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 300.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🧮 30-Day Math Challenge");
            ui.add_space(6.0);
            ui.label("One real-life math problem per day. Keep your streak going!");
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let btn_h = 40.0;
            let hay_guardado = app.has_saved_progress;

            if hay_guardado {
                let label = format!("▶ Continue (day {})", app.session.current_day());
                if big_list_button(ui, &label, btn_w, btn_h, true) {
                    app.continuar_quiz();
                }
                ui.add_space(5.0);
            }
            let start_label = if hay_guardado { "🔄 Start from scratch" } else { "▶ Start" };
            if big_list_button(ui, start_label, btn_w, btn_h, true) {
                if hay_guardado {
                    app.confirm_reset = true;
                } else {
                    app.empezar_desde_cero();
                }
            }
            ui.add_space(5.0);
            if big_list_button(ui, "🏅 Achievements", btn_w, btn_h, true) {
                app.ver_resumen();
            }

            if hay_guardado {
                ui.add_space(10.0);
                ui.label(
                    RichText::new(format!(
                        "⭐ {} points  ·  🔥 streak {}",
                        app.session.score(),
                        app.session.current_streak()
                    ))
                    .color(egui::Color32::YELLOW)
                    .strong(),
                );
            }
        });
    });
}
