use crate::judge::MatchingAttempt;
use crate::model::{Answer, Challenge, Topic};
use crate::session::Session;
use rand::Rng;
use rand::seq::SliceRandom;

/// Estado de los widgets del reto del día. Se reconstruye al cambiar de día.
#[derive(Debug, Clone, Default)]
pub struct ChallengeInput {
    pub day: u32,
    pub selected_choice: Option<usize>,
    pub matching: MatchingAttempt,
    /// Orden en que se pinta la columna derecha (índices de `items`)
    pub right_order: Vec<usize>,
    /// Orden actual de los elementos de arrastrar (índices de `items`)
    pub order: Vec<usize>,
    pub numeric_text: String,
    pub slider_value: f64,
    pub feedback: Option<String>,
}

impl ChallengeInput {
    pub fn for_session(topics: &[Topic], session: &Session, shuffle: bool) -> Self {
        match session.current_topic(topics) {
            Some(topic) => Self::for_challenge(
                &topic.challenge,
                session.current_day(),
                shuffle,
                &mut rand::thread_rng(),
            ),
            None => Self {
                day: session.current_day(),
                ..Self::default()
            },
        }
    }

    /// Prepara los widgets. Barajar solo cambia el orden en pantalla: la
    /// corrección siempre usa los índices declarados.
    pub fn for_challenge<R: Rng + ?Sized>(
        challenge: &Challenge,
        day: u32,
        shuffle: bool,
        rng: &mut R,
    ) -> Self {
        let mut input = Self {
            day,
            ..Self::default()
        };
        match challenge {
            Challenge::Matching { items, .. } => {
                input.matching = MatchingAttempt::new(items.len());
                input.right_order = display_order(items.len(), shuffle, rng);
            }
            Challenge::DragToOrder { items, .. } => {
                input.order = display_order(items.len(), shuffle, rng);
            }
            Challenge::Slider { min, .. } => input.slider_value = *min,
            Challenge::MultipleChoice { .. } | Challenge::Numeric { .. } => {}
        }
        input
    }

    /// Respuesta con la forma del reto, lista para corregir.
    pub fn answer_for(&self, challenge: &Challenge) -> Option<Answer> {
        match challenge {
            Challenge::MultipleChoice { .. } => self.selected_choice.map(Answer::Choice),
            Challenge::Matching { .. } => self.matching.completed_pairs().map(Answer::Matching),
            Challenge::Numeric { .. } => Some(Answer::Numeric(crate::judge::parse_numeric(
                &self.numeric_text,
            ))),
            Challenge::DragToOrder { items, .. } => Some(Answer::Order(
                self.order
                    .iter()
                    .filter_map(|&i| items.get(i).map(|it| it.id.clone()))
                    .collect(),
            )),
            Challenge::Slider { .. } => Some(Answer::Slider(self.slider_value)),
        }
    }
}

/// Índices `0..len`, barajados si se pide. Un barajado que deja todo en su
/// sitio se rota una posición para no enseñar la solución ya colocada.
fn display_order<R: Rng + ?Sized>(len: usize, shuffle: bool, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    if shuffle && len > 1 {
        order.shuffle(rng);
        if order.iter().enumerate().all(|(i, &v)| i == v) {
            order.rotate_left(1);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_topics_embedded;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn challenge_of_day(day: u32) -> Challenge {
        read_topics_embedded()[(day - 1) as usize].challenge.clone()
    }

    #[test]
    fn shuffled_columns_keep_every_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = ChallengeInput::for_challenge(&challenge_of_day(1), 1, true, &mut rng);
        let mut sorted = input.right_order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);

        let input = ChallengeInput::for_challenge(&challenge_of_day(13), 13, true, &mut rng);
        let mut sorted = input.order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn shuffled_order_never_starts_solved() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let input = ChallengeInput::for_challenge(&challenge_of_day(13), 13, true, &mut rng);
            assert_ne!(input.order, vec![0, 1, 2, 3], "semilla {seed}");
            let input = ChallengeInput::for_challenge(&challenge_of_day(1), 1, true, &mut rng);
            assert_ne!(input.right_order, vec![0, 1, 2], "semilla {seed}");
        }
        assert_eq!(display_order(1, true, &mut StdRng::seed_from_u64(0)), vec![0]);
    }

    #[test]
    fn without_shuffle_the_declared_order_is_kept() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = ChallengeInput::for_challenge(&challenge_of_day(13), 13, false, &mut rng);
        assert_eq!(input.order, vec![0, 1, 2, 3]);
        let answer = input.answer_for(&challenge_of_day(13));
        assert_eq!(
            answer,
            Some(Answer::Order(vec!["1".into(), "2".into(), "3".into(), "4".into()]))
        );
    }

    #[test]
    fn slider_starts_at_min_and_matching_waits_for_all_pairs() {
        let mut rng = StdRng::seed_from_u64(3);
        let slider = ChallengeInput::for_challenge(&challenge_of_day(20), 20, true, &mut rng);
        assert_eq!(slider.slider_value, 0.0);

        let mut matching = ChallengeInput::for_challenge(&challenge_of_day(1), 1, true, &mut rng);
        assert_eq!(matching.answer_for(&challenge_of_day(1)), None);
        for i in 0..3 {
            matching.matching.select_left(i);
            matching.matching.pair_with_right(i);
        }
        assert_eq!(
            matching.answer_for(&challenge_of_day(1)),
            Some(Answer::Matching(vec![(0, 0), (1, 1), (2, 2)]))
        );
    }

    #[test]
    fn numeric_text_is_parsed_on_demand() {
        let mut input = ChallengeInput::default();
        input.numeric_text = "abc".into();
        assert_eq!(input.answer_for(&challenge_of_day(2)), Some(Answer::Numeric(None)));
        input.numeric_text = "12559".into();
        assert_eq!(input.answer_for(&challenge_of_day(2)), Some(Answer::Numeric(Some(12559.0))));
    }
}
