use crate::achievements::AchievementId;
use crate::model::TOTAL_DAYS;
use crate::session::{AnswerState, POINTS_PER_CORRECT, Session};
use eframe::Storage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clave fija bajo la que se guarda el progreso.
pub const PROGRESS_KEY: &str = "math_challenge_progress";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no se pudo serializar el progreso: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Lo que se persiste de una sesión. La solución visible no se guarda.
/// `answeredCorrectly` solo aparece si el día actual ya tiene respuesta, así
/// que un día sin responder se guarda con los cinco campos de siempre.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub current_day: u32,
    pub score: u32,
    pub current_streak: u32,
    pub highest_streak: u32,
    pub unlocked_achievements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answered_correctly: Option<bool>,
}

impl From<&Session> for ProgressSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            current_day: session.current_day(),
            score: session.score(),
            current_streak: session.current_streak(),
            highest_streak: session.highest_streak(),
            unlocked_achievements: session
                .unlocked()
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
            answered_correctly: match session.answer_state() {
                AnswerState::Unanswered => None,
                AnswerState::Correct => Some(true),
                AnswerState::Incorrect => Some(false),
            },
        }
    }
}

impl ProgressSnapshot {
    /// Una puntuación que no sale de sumar aciertos no la pudo escribir la app.
    pub fn is_consistent(&self) -> bool {
        self.score % POINTS_PER_CORRECT == 0 && self.score <= TOTAL_DAYS * POINTS_PER_CORRECT
    }

    pub fn into_session(self) -> Session {
        let unlocked = self
            .unlocked_achievements
            .iter()
            .filter_map(|s| {
                let id = AchievementId::from_str_opt(s);
                if id.is_none() {
                    log::warn!("Logro desconocido en el progreso guardado: {s}");
                }
                id
            })
            .collect();
        Session::restore(
            self.current_day,
            self.score,
            self.current_streak,
            self.highest_streak,
            unlocked,
            match self.answered_correctly {
                None => AnswerState::Unanswered,
                Some(true) => AnswerState::Correct,
                Some(false) => AnswerState::Incorrect,
            },
        )
    }
}

/// Sobrescribe el progreso guardado con el de `session`.
pub fn save(storage: &mut dyn Storage, session: &Session) -> Result<(), StorageError> {
    let json = serde_json::to_string(&ProgressSnapshot::from(session))?;
    storage.set_string(PROGRESS_KEY, json);
    storage.flush();
    Ok(())
}

/// Progreso guardado, o `None` si no hay o no se puede leer.
pub fn load(storage: &dyn Storage) -> Option<Session> {
    let raw = storage.get_string(PROGRESS_KEY)?;
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<ProgressSnapshot>(&raw) {
        Ok(snapshot) if !snapshot.is_consistent() => {
            log::warn!(
                "Puntuación guardada imposible ({}), se empieza de cero",
                snapshot.score
            );
            None
        }
        Ok(snapshot) => Some(snapshot.into_session()),
        Err(e) => {
            log::warn!("Progreso guardado ilegible, se empieza de cero: {e}");
            None
        }
    }
}

pub fn clear(storage: &mut dyn Storage) {
    storage.set_string(PROGRESS_KEY, String::new());
    storage.flush();
}

pub fn has_saved_progress(storage: &dyn Storage) -> bool {
    load(storage).is_some_and(|s| s.has_progress())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        map: HashMap<String, String>,
        flushes: usize,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.map.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.map.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    fn played_session() -> Session {
        let mut s = Session::default();
        for _ in 0..3 {
            s.submit_answer(true);
            s.advance();
        }
        s.submit_answer(false);
        s
    }

    #[test]
    fn snapshot_uses_the_documented_json_layout() {
        let json = serde_json::to_value(ProgressSnapshot::from(&played_session())).unwrap();
        assert_eq!(json["currentDay"], 4);
        assert_eq!(json["score"], 30);
        assert_eq!(json["currentStreak"], 0);
        assert_eq!(json["highestStreak"], 3);
        assert_eq!(json["unlockedAchievements"][0], "math_rookie");
    }

    #[test]
    fn save_then_load_restores_persisted_fields() {
        let mut storage = MemoryStorage::default();
        let session = played_session();
        save(&mut storage, &session).unwrap();
        assert_eq!(storage.flushes, 1);

        let loaded = load(&storage).expect("hay progreso");
        assert_eq!(loaded.current_day(), 4);
        assert_eq!(loaded.score(), 30);
        assert_eq!(loaded.current_streak(), 0);
        assert_eq!(loaded.highest_streak(), 3);
        assert!(loaded.is_unlocked(AchievementId::MathRookie));
        assert_eq!(loaded.answer_state(), AnswerState::Incorrect);
        assert!(!loaded.show_solution());
    }

    #[test]
    fn unanswered_day_keeps_the_five_field_layout() {
        let json = serde_json::to_value(ProgressSnapshot::from(&Session::default())).unwrap();
        assert_eq!(json.as_object().map(|o| o.len()), Some(5));
        assert!(json.get("answeredCorrectly").is_none());
    }

    #[test]
    fn reload_cannot_score_the_same_day_twice() {
        let mut storage = MemoryStorage::default();
        let mut session = Session::default();
        session.submit_answer(true);
        save(&mut storage, &session).unwrap();

        let mut loaded = load(&storage).expect("hay progreso");
        assert!(loaded.submit_answer(true).is_none());
        assert_eq!(loaded.score(), 10);
        assert_eq!(loaded.current_streak(), 1);
    }

    #[test]
    fn impossible_score_is_treated_as_malformed() {
        let mut storage = MemoryStorage::default();
        storage.set_string(
            PROGRESS_KEY,
            r#"{"currentDay":5,"score":15,"currentStreak":7,"highestStreak":7,"unlockedAchievements":[]}"#
                .into(),
        );
        assert!(load(&storage).is_none());

        storage.set_string(
            PROGRESS_KEY,
            r#"{"currentDay":5,"score":310,"currentStreak":0,"highestStreak":0,"unlockedAchievements":[]}"#
                .into(),
        );
        assert!(load(&storage).is_none());
    }

    #[test]
    fn achievements_are_backfilled_from_highest_streak() {
        let mut storage = MemoryStorage::default();
        storage.set_string(
            PROGRESS_KEY,
            r#"{"currentDay":9,"score":70,"currentStreak":7,"highestStreak":7,"unlockedAchievements":[]}"#
                .into(),
        );
        let mut loaded = load(&storage).expect("legible");
        assert!(loaded.is_unlocked(AchievementId::MathRookie));
        assert!(loaded.is_unlocked(AchievementId::NumberNinja));

        loaded.submit_answer(false);
        assert_eq!(loaded.unlocked().len(), 2);
    }

    #[test]
    fn missing_or_malformed_snapshot_loads_as_none() {
        let mut storage = MemoryStorage::default();
        assert!(load(&storage).is_none());

        storage.set_string(PROGRESS_KEY, "{not json".into());
        assert!(load(&storage).is_none());

        storage.set_string(PROGRESS_KEY, r#"{"currentDay":2}"#.into());
        assert!(load(&storage).is_none());

        storage.set_string(
            PROGRESS_KEY,
            r#"{"currentDay":2,"score":-10,"currentStreak":0,"highestStreak":0,"unlockedAchievements":[]}"#
                .into(),
        );
        assert!(load(&storage).is_none());
    }

    #[test]
    fn out_of_range_day_and_unknown_ids_are_sanitized() {
        let mut storage = MemoryStorage::default();
        storage.set_string(
            PROGRESS_KEY,
            r#"{"currentDay":31,"score":20,"currentStreak":2,"highestStreak":2,"unlockedAchievements":["math_rookie","speed_demon"]}"#
                .into(),
        );
        let loaded = load(&storage).expect("legible");
        assert_eq!(loaded.current_day(), 1);
        assert_eq!(loaded.unlocked().len(), 1);
    }

    #[test]
    fn reset_then_clear_loads_default_state() {
        let mut storage = MemoryStorage::default();
        let mut session = played_session();
        save(&mut storage, &session).unwrap();

        session.reset();
        clear(&mut storage);
        assert!(load(&storage).is_none());
        assert!(!has_saved_progress(&storage));

        save(&mut storage, &session).unwrap();
        assert_eq!(load(&storage), Some(Session::default()));
    }
}
