use crate::QuizApp;
use crate::session::Phase;
use crate::ui::layout::two_button_row;
use egui::{CentralPanel, Context, Grid, RichText, ScrollArea};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 600.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 24))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    let completed = app.session.phase() == Phase::Completed;
                    ui.heading(if completed { "🏁 Challenge complete!" } else { "Your progress" });
                    ui.add_space(10.0);

                    let header = app.header_info();
                    Grid::new("stats_grid").striped(true).spacing([24.0, 4.0]).show(ui, |ui| {
                        ui.label("Day");
                        ui.label(header.day_label());
                        ui.end_row();
                        ui.label("Score");
                        ui.label(header.score.to_string());
                        ui.end_row();
                        ui.label("Current streak");
                        ui.label(header.streak.to_string());
                        ui.end_row();
                        ui.label("Best streak");
                        ui.label(header.highest_streak.to_string());
                        ui.end_row();
                    });

                    ui.add_space(14.0);
                    ui.label(RichText::new("Achievements").strong());
                    ui.add_space(5.0);

                    ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                        Grid::new("achievements_grid").striped(true).spacing([16.0, 6.0]).show(ui, |ui| {
                            for row in app.achievement_rows() {
                                ui.label(row.label());
                                ui.label(row.description);
                                ui.end_row();
                            }
                        });
                    });

                    ui.add_space(14.0);
                    let back_label = if completed { "Back to last challenge" } else { "Back to challenge" };
                    let (volver, reiniciar) = two_button_row(ui, panel_width, back_label, "🔄 Start again");
                    if volver {
                        app.continuar_quiz();
                    }
                    if reiniciar {
                        app.confirm_reset = true;
                    }
                });
        });
    });
}
