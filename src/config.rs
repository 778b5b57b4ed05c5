// Ajustes de arranque. En escritorio se leen de variables de entorno y en
// la web de la query string (`?shuffle=0&theme=light`).

#[cfg(not(target_arch = "wasm32"))]
const SHUFFLE_ENV: &str = "MATH_CHALLENGE_SHUFFLE";
#[cfg(not(target_arch = "wasm32"))]
const THEME_ENV: &str = "MATH_CHALLENGE_THEME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Baraja lo que se muestra: la columna derecha de emparejar y el orden
    /// inicial de los retos de ordenar
    pub shuffle_display: bool,
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shuffle_display: true,
            dark_mode: true,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_settings(setting("shuffle"), setting("theme"))
    }

    fn from_settings(shuffle: Option<String>, theme: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(flag) = shuffle.as_deref().and_then(parse_flag) {
            config.shuffle_display = flag;
        }
        match theme.as_deref().map(str::trim) {
            Some(t) if t.eq_ignore_ascii_case("light") => config.dark_mode = false,
            Some(t) if t.eq_ignore_ascii_case("dark") => config.dark_mode = true,
            Some(other) => log::warn!("Tema desconocido '{other}', se usa el oscuro"),
            None => {}
        }
        log::debug!("Configuración: {config:?}");
        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            log::warn!("Valor no reconocido '{other}', se ignora");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn setting(name: &str) -> Option<String> {
    let var = match name {
        "shuffle" => SHUFFLE_ENV,
        "theme" => THEME_ENV,
        _ => return None,
    };
    std::env::var(var).ok().filter(|s| !s.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn setting(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if key == name && !value.trim().is_empty() {
            return Some(value.to_string());
        }
    }
    None
}
