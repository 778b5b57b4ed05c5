// src/view_models.rs

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderInfo {
    pub day: u32,
    pub total_days: u32,
    pub score: u32,
    pub streak: u32,
    pub highest_streak: u32,
    pub progress: f32, // 0.0..=1.0 para la barra
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementRow {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub required_streak: u32,
    pub unlocked: bool,
}

impl HeaderInfo {
    pub fn day_label(&self) -> String {
        format!("Day {} of {}", self.day, self.total_days)
    }
}

impl AchievementRow {
    pub fn label(&self) -> String {
        if self.unlocked {
            format!("{} {} ✅", self.icon, self.title)
        } else {
            format!("🔒 {} (streak {})", self.title, self.required_streak)
        }
    }
}
