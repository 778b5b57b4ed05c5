use crate::QuizApp;
use crate::judge::matching::pair_is_correct;
use crate::judge::order::move_item;
use crate::model::{Answer, Challenge, MatchingItem, OrderItem};
use crate::ui::helpers::{SELECTED_FILL, filled_button, verdict_fill};
use egui::{Id, Key, RichText, Slider, TextEdit, Ui};

/// Pinta el widget del tipo de reto y envía la respuesta cuando está lista.
pub fn ui_challenge(app: &mut QuizApp, ui: &mut Ui, challenge: &Challenge, width: f32, now: f64) {
    match challenge {
        Challenge::MultipleChoice {
            options,
            correct_answer,
            ..
        } => ui_multiple_choice(app, ui, options, *correct_answer, width, now),
        Challenge::Matching { items, .. } => ui_matching(app, ui, items, width, now),
        Challenge::Numeric { .. } => ui_numeric(app, ui, now),
        Challenge::DragToOrder { items, .. } => ui_drag_to_order(app, ui, items, width, now),
        Challenge::Slider {
            min, max, step, ..
        } => ui_slider(app, ui, *min, *max, *step, now),
    }
}

fn ui_multiple_choice(
    app: &mut QuizApp,
    ui: &mut Ui,
    options: &[String],
    correct_answer: usize,
    width: f32,
    now: f64,
) {
    let answered = app.session.is_answered();
    for (i, option) in options.iter().enumerate() {
        // Tras responder: la correcta en verde, el resto en rojo
        let fill = answered.then(|| verdict_fill(i == correct_answer));
        if filled_button(ui, option, width, fill, !answered) {
            app.input.selected_choice = Some(i);
            app.procesar_respuesta(Answer::Choice(i), now);
        }
        ui.add_space(4.0);
    }
}

fn ui_matching(app: &mut QuizApp, ui: &mut Ui, items: &[MatchingItem], width: f32, now: f64) {
    let answered = app.session.is_answered();
    let col_w = (width - 16.0) / 2.0;
    let attempt = &app.input.matching;
    let mut picked_left = None;
    let mut picked_right = None;

    ui.columns(2, |cols| {
        cols[0].label(RichText::new("Items:").strong());
        for (i, item) in items.iter().enumerate() {
            let fill = if attempt.selected_left() == Some(i) {
                Some(SELECTED_FILL)
            } else {
                attempt
                    .pair_for_left(i)
                    .map(|pair| verdict_fill(pair_is_correct(items, pair)))
            };
            let enabled = !answered && !attempt.is_left_matched(i);
            if filled_button(&mut cols[0], &item.left, col_w, fill, enabled) {
                picked_left = Some(i);
            }
        }

        // La columna derecha se pinta en el orden barajado
        cols[1].label(RichText::new("Matches:").strong());
        for &idx in &app.input.right_order {
            let fill = attempt
                .pair_for_right(idx)
                .map(|pair| verdict_fill(pair_is_correct(items, pair)));
            let enabled =
                !answered && attempt.selected_left().is_some() && !attempt.is_right_matched(idx);
            if filled_button(&mut cols[1], &items[idx].right, col_w, fill, enabled) {
                picked_right = Some(idx);
            }
        }
    });

    if let Some(i) = picked_left {
        app.input.matching.select_left(i);
    }
    if let Some(idx) = picked_right {
        if app.input.matching.pair_with_right(idx) && app.input.matching.is_complete() {
            app.enviar_respuesta_actual(now);
        }
    }

    if app.input.matching.selected_left().is_some() {
        ui.add_space(4.0);
        ui.label(RichText::new("Now click the matching item on the right").color(SELECTED_FILL));
    }
}

fn ui_numeric(app: &mut QuizApp, ui: &mut Ui, now: f64) {
    let answered = app.session.is_answered();
    let mut enviar = false;
    ui.horizontal(|ui| {
        let response = ui.add_enabled(
            !answered,
            TextEdit::singleline(&mut app.input.numeric_text)
                .hint_text("Your answer")
                .desired_width(200.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            enviar = true;
        }
        if ui.add_enabled(!answered, egui::Button::new("Check")).clicked() {
            enviar = true;
        }
    });
    if enviar && !answered {
        app.enviar_respuesta_actual(now);
    }
}

fn ui_drag_to_order(app: &mut QuizApp, ui: &mut Ui, items: &[OrderItem], width: f32, now: f64) {
    let answered = app.session.is_answered();
    let mut moved: Option<(usize, usize)> = None;

    for (row, &item_idx) in app.input.order.iter().enumerate() {
        let Some(item) = items.get(item_idx) else {
            continue;
        };
        let text = format!("☰  {}", item.content);
        if answered {
            let correct = item.correct_position == row;
            egui::Frame::group(ui.style())
                .fill(verdict_fill(correct))
                .show(ui, |ui| {
                    ui.set_width(width);
                    ui.label(text);
                });
            continue;
        }

        let response = ui
            .dnd_drag_source(Id::new(("order_item", item_idx)), row, |ui| {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(width);
                    ui.label(text);
                });
            })
            .response;
        if let Some(from) = response.dnd_release_payload::<usize>() {
            moved = Some((*from, row));
        }
    }

    if let Some((from, to)) = moved {
        move_item(&mut app.input.order, from, to);
    }

    ui.add_space(6.0);
    if ui.add_enabled(!answered, egui::Button::new("Check order")).clicked() {
        app.enviar_respuesta_actual(now);
    }
}

fn ui_slider(app: &mut QuizApp, ui: &mut Ui, min: f64, max: f64, step: f64, now: f64) {
    let answered = app.session.is_answered();
    let mut enviar = false;
    ui.horizontal(|ui| {
        ui.add_enabled(
            !answered,
            Slider::new(&mut app.input.slider_value, min..=max).step_by(step),
        );
        if ui.add_enabled(!answered, egui::Button::new("Check")).clicked() {
            enviar = true;
        }
    });
    if enviar {
        app.enviar_respuesta_actual(now);
    }
}
