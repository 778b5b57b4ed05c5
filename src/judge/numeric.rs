/// Interpreta el texto del usuario como número. Vacío, texto no numérico,
/// `NaN` o infinito devuelven `None`.
pub fn parse_numeric(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// `|value - target| <= tolerance`, contando como acierto el valor exacto
/// `target ± tolerance` aunque la resta binaria lo deje unos ULP por encima.
pub fn within_tolerance(value: f64, target: f64, tolerance: f64) -> bool {
    if !value.is_finite() || !target.is_finite() || tolerance < 0.0 {
        return false;
    }
    let slack = f64::EPSILON * 16.0 * value.abs().max(target.abs()).max(1.0);
    (value - target).abs() <= tolerance + slack
}
