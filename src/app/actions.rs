use super::*;
use crate::judge::grade;
use crate::model::{Answer, Challenge};
use crate::session::Phase;

impl QuizApp {
    /// Corrige la respuesta del día y la registra. `now` es el reloj de la
    /// UI, para programar el aviso de logro.
    pub fn procesar_respuesta(&mut self, answer: Answer, now: f64) {
        let Some(topic) = self.current_topic() else {
            self.message = "Internal error: no challenge for this day.".into();
            return;
        };
        let correcta = grade(&topic.challenge, &answer);
        let feedback = feedback_for(&topic.challenge, correcta);

        let Some(outcome) = self.session.submit_answer(correcta) else {
            return;
        };

        self.input.feedback = Some(feedback);
        self.message = if correcta {
            "✅ Correct! +10 points".into()
        } else {
            "❌ Not quite. Check the solution and try the next one.".into()
        };

        if let Some(id) = outcome.headline() {
            log::info!("Logro desbloqueado: {}", id.as_str());
            self.toast.show(id, now, TOAST_SECS);
        }
        if self.session.take_completion() {
            log::info!("Calendario completado con {} puntos", self.session.score());
            self.show_completion = true;
        }
        self.has_saved_progress = true;
        self.pending_write = Some(PendingWrite::Save);
    }

    /// Corrige con lo que haya en los widgets, si ya forma una respuesta.
    pub fn enviar_respuesta_actual(&mut self, now: f64) {
        let answer = self
            .current_topic()
            .and_then(|t| self.input.answer_for(&t.challenge));
        if let Some(answer) = answer {
            self.procesar_respuesta(answer, now);
        }
    }

    /// Pasa al siguiente reto, o al resumen si el calendario ya terminó.
    pub fn avanzar_a_siguiente_reto(&mut self) {
        if self.session.advance() {
            self.rebuild_input();
            self.message.clear();
            self.pending_write = Some(PendingWrite::Save);
        } else if self.session.phase() == Phase::Completed {
            self.ver_resumen();
        }
    }

    pub fn alternar_solucion(&mut self) {
        self.session.toggle_solution();
    }

    pub fn continuar_quiz(&mut self) {
        if self.input.day != self.session.current_day() {
            self.rebuild_input();
        }
        self.state = AppState::Quiz;
        self.message.clear();
    }

    pub fn ver_resumen(&mut self) {
        self.show_completion = false;
        self.state = AppState::Summary;
    }

    pub fn volver_al_inicio(&mut self) {
        self.state = AppState::Welcome;
        self.message.clear();
    }

    pub(crate) fn rebuild_input(&mut self) {
        self.input =
            ChallengeInput::for_session(&self.topics, &self.session, self.config.shuffle_display);
    }
}

fn feedback_for(challenge: &Challenge, correcta: bool) -> String {
    match (challenge, correcta) {
        (Challenge::Matching { .. }, true) => "Perfect match! All items correctly matched!".into(),
        (Challenge::Matching { .. }, false) => {
            "Some matches are incorrect. Check the colored borders and the solution.".into()
        }
        (Challenge::Numeric { correct_answer, .. }, false)
        | (Challenge::Slider { correct_answer, .. }, false) => {
            format!("Incorrect. The answer should be {correct_answer}")
        }
        (Challenge::DragToOrder { .. }, false) => "That order isn't right.".into(),
        (Challenge::MultipleChoice { .. }, false) => "Wrong option.".into(),
        (_, true) => "Correct!".into(),
    }
}
