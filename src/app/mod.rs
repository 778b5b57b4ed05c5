use crate::config::AppConfig;
use crate::data::read_topics_embedded;
use crate::model::{AppState, Topic};
use crate::session::Session;
use crate::storage;
use crate::toast::ToastSlot;
use eframe::egui;

// Submódulos
pub mod actions;
pub mod input;
pub mod progress;
pub mod resets;
pub mod view_models;

pub use input::ChallengeInput;
// Re-export de view models
pub use crate::view_models::{AchievementRow, HeaderInfo};

/// Duración del aviso de logro, en segundos.
pub const TOAST_SECS: f64 = 3.0;

/// Escritura pendiente en el almacenamiento, se aplica al final del frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingWrite {
    Save,
    Clear,
}

pub struct QuizApp {
    pub topics: Vec<Topic>,
    pub session: Session,
    pub config: AppConfig,
    pub state: AppState,
    pub input: ChallengeInput,
    pub toast: ToastSlot,
    pub message: String,
    pub confirm_reset: bool,
    pub show_completion: bool,
    pub has_saved_progress: bool,
    pub pending_write: Option<PendingWrite>,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load();
        cc.egui_ctx.set_visuals(if config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let session = cc.storage.and_then(storage::load).unwrap_or_else(|| {
            log::info!("Sin progreso guardado, se empieza en el día 1");
            Session::default()
        });
        Self::with_session(session, config)
    }

    pub fn with_session(session: Session, config: AppConfig) -> Self {
        let topics = read_topics_embedded();
        let has_saved_progress = session.has_progress();
        let input = ChallengeInput::for_session(&topics, &session, config.shuffle_display);
        log::info!(
            "Día {} de {}, puntos {}",
            session.current_day(),
            topics.len(),
            session.score()
        );

        Self {
            topics,
            session,
            config,
            state: AppState::Welcome,
            input,
            toast: ToastSlot::default(),
            message: String::new(),
            confirm_reset: false,
            show_completion: false,
            has_saved_progress,
            pending_write: None,
        }
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        self.session.current_topic(&self.topics)
    }
}
