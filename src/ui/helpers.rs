// src/ui/helpers.rs
use egui::{Button, Color32, Ui, Vec2};

pub const CORRECT_FILL: Color32 = Color32::from_rgb(34, 120, 60);
pub const WRONG_FILL: Color32 = Color32::from_rgb(150, 40, 40);
pub const SELECTED_FILL: Color32 = Color32::from_rgb(40, 90, 170);

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón de ancho fijo con color de fondo opcional (acierto/fallo/selección).
pub fn filled_button(
    ui: &mut Ui,
    label: &str,
    width: f32,
    fill: Option<Color32>,
    enabled: bool,
) -> bool {
    let mut button = Button::new(label).min_size(Vec2::new(width, 36.0));
    if let Some(color) = fill {
        button = button.fill(color);
    }
    ui.add_enabled(enabled, button).clicked()
}

pub fn verdict_fill(correct: bool) -> Color32 {
    if correct { CORRECT_FILL } else { WRONG_FILL }
}
