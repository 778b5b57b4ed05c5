use crate::model::MatchingItem;

/// Correcto solo si el emparejamiento está completo (cada índice izquierdo
/// y derecho aparece exactamente una vez) y cada par coincide con el
/// `correct_index` declarado.
pub fn grade_matching(items: &[MatchingItem], pairs: &[(usize, usize)]) -> bool {
    is_complete_pairing(items.len(), pairs)
        && pairs.iter().all(|&pair| pair_is_correct(items, pair))
}

pub fn pair_is_correct(items: &[MatchingItem], (left, right): (usize, usize)) -> bool {
    items.get(left).is_some_and(|it| it.correct_index == right)
}

fn is_complete_pairing(size: usize, pairs: &[(usize, usize)]) -> bool {
    if pairs.len() != size {
        return false;
    }
    let mut lefts = vec![false; size];
    let mut rights = vec![false; size];
    for &(l, r) in pairs {
        if l >= size || r >= size || lefts[l] || rights[r] {
            return false;
        }
        lefts[l] = true;
        rights[r] = true;
    }
    true
}

/// Estado incremental de un emparejamiento: primero se elige un elemento
/// de la izquierda y luego su pareja de la derecha.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchingAttempt {
    size: usize,
    selected_left: Option<usize>,
    pairs: Vec<(usize, usize)>,
}

impl MatchingAttempt {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            selected_left: None,
            pairs: Vec::with_capacity(size),
        }
    }

    pub fn selected_left(&self) -> Option<usize> {
        self.selected_left
    }

    /// Selecciona (o deselecciona) un elemento izquierdo aún libre.
    pub fn select_left(&mut self, left: usize) {
        if left >= self.size || self.is_left_matched(left) {
            return;
        }
        self.selected_left = if self.selected_left == Some(left) {
            None
        } else {
            Some(left)
        };
    }

    /// Empareja el izquierdo seleccionado con `right`. Devuelve `true` si
    /// se añadió el par.
    pub fn pair_with_right(&mut self, right: usize) -> bool {
        let Some(left) = self.selected_left else {
            return false;
        };
        if right >= self.size || self.is_right_matched(right) {
            return false;
        }
        self.pairs.push((left, right));
        self.selected_left = None;
        true
    }

    pub fn is_left_matched(&self, left: usize) -> bool {
        self.pairs.iter().any(|&(l, _)| l == left)
    }

    pub fn is_right_matched(&self, right: usize) -> bool {
        self.pairs.iter().any(|&(_, r)| r == right)
    }

    pub fn pair_for_left(&self, left: usize) -> Option<(usize, usize)> {
        self.pairs.iter().copied().find(|&(l, _)| l == left)
    }

    pub fn pair_for_right(&self, right: usize) -> Option<(usize, usize)> {
        self.pairs.iter().copied().find(|&(_, r)| r == right)
    }

    pub fn is_complete(&self) -> bool {
        self.size > 0 && self.pairs.len() == self.size
    }

    /// Los pares, solo cuando ya están todos hechos.
    pub fn completed_pairs(&self) -> Option<Vec<(usize, usize)>> {
        self.is_complete().then(|| self.pairs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<MatchingItem> {
        vec![
            MatchingItem { left: "60 km/h".into(), right: "3 hours".into(), correct_index: 0 },
            MatchingItem { left: "90 km/h".into(), right: "2 hours".into(), correct_index: 1 },
            MatchingItem { left: "120 km/h".into(), right: "1.5 hours".into(), correct_index: 2 },
        ]
    }

    #[test]
    fn complete_correct_pairing_passes() {
        assert!(grade_matching(&items(), &[(2, 2), (0, 0), (1, 1)]));
    }

    #[test]
    fn one_wrong_pair_fails() {
        assert!(!grade_matching(&items(), &[(0, 1), (1, 0), (2, 2)]));
    }

    #[test]
    fn partial_or_duplicated_pairings_fail() {
        assert!(!grade_matching(&items(), &[(0, 0), (1, 1)]));
        assert!(!grade_matching(&items(), &[(0, 0), (0, 0), (2, 2)]));
        assert!(!grade_matching(&items(), &[(0, 0), (1, 1), (2, 5)]));
    }

    #[test]
    fn attempt_yields_pairs_only_when_complete() {
        let mut attempt = MatchingAttempt::new(3);
        assert!(!attempt.pair_with_right(0), "sin izquierdo seleccionado");

        attempt.select_left(1);
        assert_eq!(attempt.selected_left(), Some(1));
        assert!(attempt.pair_with_right(1));
        assert_eq!(attempt.completed_pairs(), None);

        attempt.select_left(0);
        assert!(attempt.pair_with_right(0));
        attempt.select_left(2);
        assert!(attempt.pair_with_right(2));

        let pairs = attempt.completed_pairs().expect("completo");
        assert!(grade_matching(&items(), &pairs));
    }

    #[test]
    fn attempt_refuses_to_reuse_an_index() {
        let mut attempt = MatchingAttempt::new(3);
        attempt.select_left(0);
        attempt.pair_with_right(2);

        attempt.select_left(0);
        assert_eq!(attempt.selected_left(), None, "izquierdo ya emparejado");

        attempt.select_left(1);
        assert!(!attempt.pair_with_right(2), "derecho ya emparejado");
        assert_eq!(attempt.selected_left(), Some(1));
    }

    #[test]
    fn selecting_twice_clears_selection() {
        let mut attempt = MatchingAttempt::new(2);
        attempt.select_left(1);
        attempt.select_left(1);
        assert_eq!(attempt.selected_left(), None);
    }
}
