use crate::QuizApp;
use crate::session::{AnswerState, Phase};
use crate::ui::views::challenge::ui_challenge;
use crate::view_models::HeaderInfo;
use egui::{Align, CentralPanel, Context, Layout, ProgressBar, RichText, ScrollArea, Ui};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 720.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(panel_width);
                header(ui, &app.header_info());
                ui.add_space(10.0);

                // Copia del tema: los widgets necesitan `&mut app`
                let Some(topic) = app.current_topic().cloned() else {
                    ui.label("No challenge available.");
                    return;
                };

                egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(12)).show(ui, |ui| {
                    ui.set_width(panel_width);
                    ui.with_layout(Layout::top_down(Align::Min), |ui| {
                        ui.heading(&topic.name);
                        ui.label(&topic.description);
                        ui.label(
                            RichText::new(format!(
                                "{}  ·  🎖 {}",
                                topic.difficulty.label(),
                                topic.badge
                            ))
                            .weak(),
                        );
                        ui.add_space(10.0);

                        ui.label(RichText::new("Today's Challenge:").strong());
                        ui.label(topic.challenge.question());
                        ui.add_space(8.0);

                        ui_challenge(app, ui, &topic.challenge, panel_width - 24.0, now);

                        if let Some(feedback) = &app.input.feedback {
                            ui.add_space(6.0);
                            let color = match app.session.answer_state() {
                                AnswerState::Correct => egui::Color32::LIGHT_GREEN,
                                _ => egui::Color32::LIGHT_RED,
                            };
                            ui.label(RichText::new(feedback).color(color));
                        }

                        if app.session.show_solution() {
                            ui.add_space(10.0);
                            ui.separator();
                            ui.label(RichText::new("Solution:").strong());
                            for step in &topic.challenge.solution().steps {
                                ui.label(format!("➡ {step}"));
                            }
                            ui.add_space(4.0);
                            ui.label(format!(
                                "Explanation: {}",
                                topic.challenge.solution().explanation
                            ));
                        }
                    });
                });

                ui.add_space(10.0);
                control_buttons(app, ui, panel_width);

                ui.add_space(8.0);
                if !app.message.is_empty() {
                    ui.label(&app.message);
                }
            });
        });
    });
}

fn header(ui: &mut Ui, info: &HeaderInfo) {
    egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(10)).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading(info.day_label());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(format!("🏆 Best: {}", info.highest_streak));
                ui.label(format!("🔥 Streak: {}", info.streak));
                ui.label(format!("⭐ Score: {}", info.score));
            });
        });
        ui.add(ProgressBar::new(info.progress).show_percentage());
    });
}

fn control_buttons(app: &mut QuizApp, ui: &mut Ui, panel_width: f32) {
    let solution_label = if app.session.show_solution() {
        "Hide Solution"
    } else {
        "Show Solution"
    };

    let next_label = match app.session.phase() {
        Phase::Awaiting { .. } => None,
        Phase::Answered { correct: true, .. } => Some("Next Challenge (Correct +10pts)"),
        Phase::Answered { correct: false, .. } => Some("Try Next Challenge"),
        Phase::Completed => Some("🏁 See summary"),
    };

    match next_label {
        Some(next_label) => {
            let (solucion, siguiente) =
                crate::ui::layout::two_button_row(ui, panel_width, solution_label, next_label);
            if solucion {
                app.alternar_solucion();
            }
            if siguiente {
                app.avanzar_a_siguiente_reto();
            }
        }
        None => {
            if ui
                .add_sized([panel_width, 36.0], egui::Button::new(solution_label))
                .clicked()
            {
                app.alternar_solucion();
            }
        }
    }
}
