use crate::model::OrderItem;

/// Correcto si `ids` es una permutación de los elementos y cada uno queda
/// en su `correct_position`.
pub fn grade_order(items: &[OrderItem], ids: &[String]) -> bool {
    if ids.len() != items.len() {
        return false;
    }
    let mut seen = vec![false; items.len()];
    for (position, id) in ids.iter().enumerate() {
        let Some(idx) = items.iter().position(|it| &it.id == id) else {
            return false;
        };
        if seen[idx] || items[idx].correct_position != position {
            return false;
        }
        seen[idx] = true;
    }
    true
}

/// Mueve el elemento de `from` a `to`, como al soltar un arrastre.
pub fn move_item<T>(list: &mut Vec<T>, from: usize, to: usize) {
    if from >= list.len() || to >= list.len() || from == to {
        return;
    }
    let item = list.remove(from);
    list.insert(to, item);
}
