use crate::achievements::{self, AchievementId};
use crate::data::topic_for_day;
use crate::model::{TOTAL_DAYS, Topic};
use std::collections::BTreeSet;

/// Puntos por respuesta correcta.
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Awaiting { day: u32 },
    Answered { day: u32, correct: bool },
    Completed,
}

/// Resultado de registrar una respuesta.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitOutcome {
    pub correct: bool,
    pub newly_unlocked: Vec<AchievementId>,
    /// Era la respuesta del último día
    pub completed: bool,
}

impl SubmitOutcome {
    pub fn headline(&self) -> Option<AchievementId> {
        achievements::headline(&self.newly_unlocked)
    }
}

/// Progreso de una partida. Solo cambia a través de sus operaciones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current_day: u32,
    score: u32,
    current_streak: u32,
    highest_streak: u32,
    unlocked: BTreeSet<AchievementId>,
    answer_state: AnswerState,
    show_solution: bool,
    completion_pending: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current_day: 1,
            score: 0,
            current_streak: 0,
            highest_streak: 0,
            unlocked: BTreeSet::new(),
            answer_state: AnswerState::Unanswered,
            show_solution: false,
            completion_pending: false,
        }
    }
}

impl Session {
    /// Reconstruye una sesión guardada. Un día fuera de rango vuelve al 1 (y
    /// pierde su respuesta), la racha máxima nunca queda por debajo de la
    /// actual y se desbloquean los logros que esa racha máxima ya alcanzó.
    pub fn restore(
        current_day: u32,
        score: u32,
        current_streak: u32,
        highest_streak: u32,
        mut unlocked: BTreeSet<AchievementId>,
        answer_state: AnswerState,
    ) -> Self {
        let (current_day, answer_state) = if (1..=TOTAL_DAYS).contains(&current_day) {
            (current_day, answer_state)
        } else {
            log::debug!("Día guardado {current_day} fuera de rango, se vuelve al día 1");
            (1, AnswerState::Unanswered)
        };
        let highest_streak = highest_streak.max(current_streak);
        let missing = achievements::newly_unlocked(highest_streak, &unlocked);
        if !missing.is_empty() {
            log::debug!("Logros recuperados por racha máxima {highest_streak}: {missing:?}");
            unlocked.extend(missing);
        }
        Self {
            current_day,
            score,
            current_streak,
            highest_streak,
            unlocked,
            answer_state,
            ..Self::default()
        }
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }
    pub fn highest_streak(&self) -> u32 {
        self.highest_streak
    }
    pub fn unlocked(&self) -> &BTreeSet<AchievementId> {
        &self.unlocked
    }
    pub fn answer_state(&self) -> AnswerState {
        self.answer_state
    }
    pub fn show_solution(&self) -> bool {
        self.show_solution
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    pub fn is_answered(&self) -> bool {
        self.answer_state != AnswerState::Unanswered
    }

    pub fn is_final_day(&self) -> bool {
        self.current_day >= TOTAL_DAYS
    }

    /// Hay algo que merezca la pena "continuar".
    pub fn has_progress(&self) -> bool {
        self.current_day > 1 || self.score > 0 || self.is_answered() || !self.unlocked.is_empty()
    }

    pub fn phase(&self) -> Phase {
        match self.answer_state {
            AnswerState::Unanswered => Phase::Awaiting {
                day: self.current_day,
            },
            _ if self.is_final_day() => Phase::Completed,
            state => Phase::Answered {
                day: self.current_day,
                correct: state == AnswerState::Correct,
            },
        }
    }

    pub fn current_topic<'a>(&self, topics: &'a [Topic]) -> Option<&'a Topic> {
        topic_for_day(topics, self.current_day)
    }

    /// Fracción del calendario (día actual / total) para la barra de progreso.
    pub fn progress_fraction(&self) -> f32 {
        self.current_day as f32 / TOTAL_DAYS as f32
    }

    /// Registra el veredicto del día. Solo cuenta la primera respuesta de
    /// cada día: las siguientes devuelven `None` y no cambian nada.
    pub fn submit_answer(&mut self, correct: bool) -> Option<SubmitOutcome> {
        if self.is_answered() {
            log::debug!("Día {} ya respondido, se ignora", self.current_day);
            return None;
        }

        if correct {
            self.score += POINTS_PER_CORRECT;
            self.current_streak += 1;
            self.highest_streak = self.highest_streak.max(self.current_streak);
            self.answer_state = AnswerState::Correct;
        } else {
            self.current_streak = 0;
            self.answer_state = AnswerState::Incorrect;
        }

        let newly_unlocked = achievements::newly_unlocked(self.current_streak, &self.unlocked);
        self.unlocked.extend(newly_unlocked.iter().copied());

        let completed = self.is_final_day();
        if completed {
            self.completion_pending = true;
        }

        log::debug!(
            "Día {}: {} (puntos {}, racha {})",
            self.current_day,
            if correct { "correcto" } else { "incorrecto" },
            self.score,
            self.current_streak
        );

        Some(SubmitOutcome {
            correct,
            newly_unlocked,
            completed,
        })
    }

    /// Pasa al día siguiente. Solo con el día ya respondido y antes del
    /// último; en otro caso no hace nada y devuelve `false`.
    pub fn advance(&mut self) -> bool {
        if !self.is_answered() || self.is_final_day() {
            return false;
        }
        self.current_day += 1;
        self.answer_state = AnswerState::Unanswered;
        self.show_solution = false;
        true
    }

    /// Consume la señal de fin del calendario. `true` una sola vez.
    pub fn take_completion(&mut self) -> bool {
        std::mem::take(&mut self.completion_pending)
    }

    pub fn toggle_solution(&mut self) {
        self.show_solution = !self.show_solution;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
