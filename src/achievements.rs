use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum AchievementId {
    MathRookie,
    NumberNinja,
    MathMaster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: AchievementId,
    pub required_streak: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Niveles de logro, de menor a mayor racha necesaria.
pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        id: AchievementId::MathRookie,
        required_streak: 3,
        title: "Math Rookie",
        description: "Answer 3 challenges in a row correctly",
        icon: "⭐",
    },
    Achievement {
        id: AchievementId::NumberNinja,
        required_streak: 5,
        title: "Number Ninja",
        description: "Answer 5 challenges in a row correctly",
        icon: "🏅",
    },
    Achievement {
        id: AchievementId::MathMaster,
        required_streak: 10,
        title: "Math Master",
        description: "Answer 10 challenges in a row correctly",
        icon: "🏆",
    },
];

impl AchievementId {
    pub fn as_str(self) -> &'static str {
        match self {
            AchievementId::MathRookie => "math_rookie",
            AchievementId::NumberNinja => "number_ninja",
            AchievementId::MathMaster => "math_master",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        ACHIEVEMENTS
            .iter()
            .map(|a| a.id)
            .find(|id| id.as_str() == s)
    }

    pub fn info(self) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == self)
            .unwrap_or(&ACHIEVEMENTS[0])
    }
}

/// Logros alcanzados con `streak` que aún no están en `unlocked`, ordenados
/// por umbral ascendente.
pub fn newly_unlocked(streak: u32, unlocked: &BTreeSet<AchievementId>) -> Vec<AchievementId> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| a.required_streak <= streak && !unlocked.contains(&a.id))
        .map(|a| a.id)
        .collect()
}

/// El de mayor umbral entre `ids`, que es el que se anuncia.
pub fn headline(ids: &[AchievementId]) -> Option<AchievementId> {
    ids.iter().copied().max_by_key(|id| id.info().required_streak)
}
