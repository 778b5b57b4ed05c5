use serde::{Deserialize, Serialize};

/// Número de días (y de retos) del calendario.
pub const TOTAL_DAYS: u32 = 30;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub steps: Vec<String>,
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchingItem {
    pub left: String,
    pub right: String,
    pub correct_index: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: String,
    pub content: String,
    pub correct_position: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Challenge {
    Matching {
        question: String,
        items: Vec<MatchingItem>,
        solution: Solution,
    },
    MultipleChoice {
        question: String,
        options: Vec<String>,
        correct_answer: usize,
        solution: Solution,
    },
    Numeric {
        question: String,
        correct_answer: f64,
        tolerance: f64,
        solution: Solution,
    },
    DragToOrder {
        question: String,
        items: Vec<OrderItem>,
        solution: Solution,
    },
    Slider {
        question: String,
        min: f64,
        max: f64,
        step: f64,
        correct_answer: f64,
        tolerance: f64,
        solution: Solution,
    },
}

impl Challenge {
    pub fn question(&self) -> &str {
        match self {
            Challenge::Matching { question, .. }
            | Challenge::MultipleChoice { question, .. }
            | Challenge::Numeric { question, .. }
            | Challenge::DragToOrder { question, .. }
            | Challenge::Slider { question, .. } => question,
        }
    }

    pub fn solution(&self) -> &Solution {
        match self {
            Challenge::Matching { solution, .. }
            | Challenge::MultipleChoice { solution, .. }
            | Challenge::Numeric { solution, .. }
            | Challenge::DragToOrder { solution, .. }
            | Challenge::Slider { solution, .. } => solution,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Topic {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub badge: String,
    pub challenge: Challenge,
}

/// Respuesta del usuario, con la forma de cada tipo de reto.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Choice(usize),
    /// Pares (índice izquierdo, índice derecho)
    Matching(Vec<(usize, usize)>),
    Numeric(Option<f64>),
    /// Ids de los elementos en el orden elegido
    Order(Vec<String>),
    Slider(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Welcome,
    Quiz,
    Summary,
}
