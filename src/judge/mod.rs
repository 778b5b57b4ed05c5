pub mod matching;
pub mod numeric;
pub mod order;

use crate::model::{Answer, Challenge};

pub use matching::MatchingAttempt;
pub use numeric::{parse_numeric, within_tolerance};

/// Corrige una respuesta contra su reto. Sin efectos secundarios.
///
/// Si la forma de la respuesta no corresponde al tipo de reto, se
/// considera incorrecta.
pub fn grade(challenge: &Challenge, answer: &Answer) -> bool {
    match (challenge, answer) {
        (Challenge::MultipleChoice { correct_answer, .. }, Answer::Choice(selected)) => {
            selected == correct_answer
        }
        (Challenge::Matching { items, .. }, Answer::Matching(pairs)) => {
            matching::grade_matching(items, pairs)
        }
        (
            Challenge::Numeric {
                correct_answer,
                tolerance,
                ..
            },
            Answer::Numeric(value),
        ) => value.is_some_and(|v| within_tolerance(v, *correct_answer, *tolerance)),
        (Challenge::DragToOrder { items, .. }, Answer::Order(ids)) => order::grade_order(items, ids),
        (
            Challenge::Slider {
                correct_answer,
                tolerance,
                ..
            },
            Answer::Slider(value),
        ) => within_tolerance(*value, *correct_answer, *tolerance),
        _ => {
            log::warn!("Respuesta con forma distinta al reto, se marca como incorrecta");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_topics_embedded;
    use crate::model::{MatchingItem, OrderItem, Solution};

    fn solution() -> Solution {
        Solution {
            steps: vec!["1. paso".into()],
            explanation: "explicación".into(),
        }
    }

    fn numeric(correct_answer: f64, tolerance: f64) -> Challenge {
        Challenge::Numeric {
            question: "¿?".into(),
            correct_answer,
            tolerance,
            solution: solution(),
        }
    }

    #[test]
    fn multiple_choice_requires_exact_index() {
        let c = Challenge::MultipleChoice {
            question: "¿?".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: 1,
            solution: solution(),
        };
        assert!(grade(&c, &Answer::Choice(1)));
        assert!(!grade(&c, &Answer::Choice(0)));
        assert!(!grade(&c, &Answer::Choice(2)));
    }

    #[test]
    fn numeric_tickets_scenario() {
        let c = numeric(12560.0, 1.0);
        assert!(grade(&c, &Answer::Numeric(Some(12559.0))));
        assert!(grade(&c, &Answer::Numeric(Some(12561.0))));
        assert!(!grade(&c, &Answer::Numeric(Some(12558.4))));
    }

    #[test]
    fn numeric_without_a_parsed_value_fails() {
        let c = numeric(12.0, 0.1);
        assert!(!grade(&c, &Answer::Numeric(None)));
        assert!(!grade(&c, &Answer::Numeric(parse_numeric("doce"))));
    }

    #[test]
    fn zero_tolerance_is_exact_match() {
        let c = numeric(0.0, 0.0);
        assert!(grade(&c, &Answer::Numeric(Some(0.0))));
        assert!(!grade(&c, &Answer::Numeric(Some(1.0))));
        assert!(!grade(&c, &Answer::Numeric(Some(0.001))));
    }

    #[test]
    fn slider_uses_numeric_rule() {
        let c = Challenge::Slider {
            question: "¿?".into(),
            min: 0.0,
            max: 1.0,
            step: 0.01,
            correct_answer: 0.15,
            tolerance: 0.01,
            solution: solution(),
        };
        assert!(grade(&c, &Answer::Slider(0.15)));
        assert!(grade(&c, &Answer::Slider(0.16)));
        assert!(grade(&c, &Answer::Slider(0.14)));
        assert!(!grade(&c, &Answer::Slider(0.18)));
    }

    #[test]
    fn matching_and_order_dispatch() {
        let m = Challenge::Matching {
            question: "¿?".into(),
            items: vec![
                MatchingItem { left: "a".into(), right: "1".into(), correct_index: 1 },
                MatchingItem { left: "b".into(), right: "2".into(), correct_index: 0 },
            ],
            solution: solution(),
        };
        assert!(grade(&m, &Answer::Matching(vec![(0, 1), (1, 0)])));
        assert!(!grade(&m, &Answer::Matching(vec![(0, 0), (1, 1)])));

        let o = Challenge::DragToOrder {
            question: "¿?".into(),
            items: vec![
                OrderItem { id: "x".into(), content: "x".into(), correct_position: 1 },
                OrderItem { id: "y".into(), content: "y".into(), correct_position: 0 },
            ],
            solution: solution(),
        };
        assert!(grade(&o, &Answer::Order(vec!["y".into(), "x".into()])));
        assert!(!grade(&o, &Answer::Order(vec!["x".into(), "y".into()])));
    }

    #[test]
    fn mismatched_answer_shape_is_incorrect() {
        let c = numeric(5.0, 0.1);
        assert!(!grade(&c, &Answer::Choice(5)));
        assert!(!grade(&c, &Answer::Slider(5.0)));
    }

    #[test]
    fn every_catalog_challenge_accepts_its_declared_answer() {
        for topic in read_topics_embedded() {
            let answer = match &topic.challenge {
                Challenge::MultipleChoice { correct_answer, .. } => Answer::Choice(*correct_answer),
                Challenge::Matching { items, .. } => Answer::Matching(
                    items.iter().enumerate().map(|(l, it)| (l, it.correct_index)).collect(),
                ),
                Challenge::Numeric { correct_answer, .. } => Answer::Numeric(Some(*correct_answer)),
                Challenge::DragToOrder { items, .. } => {
                    let mut sorted: Vec<&OrderItem> = items.iter().collect();
                    sorted.sort_by_key(|it| it.correct_position);
                    Answer::Order(sorted.into_iter().map(|it| it.id.clone()).collect())
                }
                Challenge::Slider { correct_answer, .. } => Answer::Slider(*correct_answer),
            };
            assert!(grade(&topic.challenge, &answer), "día {}", topic.id);
        }
    }
}
