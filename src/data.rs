// src/data.rs

use crate::model::{TOTAL_DAYS, Topic};

/// Carga el calendario de retos desde el YAML embebido
pub fn read_topics_embedded() -> Vec<Topic> {
    let file_content = include_str!("data/topics.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el calendario de retos YAML")
}

/// Tema de un día (1-based). Fuera de rango devuelve el del día 1.
pub fn topic_for_day(topics: &[Topic], day: u32) -> Option<&Topic> {
    let idx = if (1..=TOTAL_DAYS).contains(&day) {
        (day - 1) as usize
    } else {
        log::debug!("Día {day} fuera de rango, se usa el día 1");
        0
    };
    topics.get(idx).or_else(|| topics.first())
}
