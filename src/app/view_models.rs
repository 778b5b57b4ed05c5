use super::*;
use crate::achievements::ACHIEVEMENTS;
use crate::model::TOTAL_DAYS;

impl QuizApp {
    pub fn header_info(&self) -> HeaderInfo {
        HeaderInfo {
            day: self.session.current_day(),
            total_days: TOTAL_DAYS,
            score: self.session.score(),
            streak: self.session.current_streak(),
            highest_streak: self.session.highest_streak(),
            progress: self.session.progress_fraction(),
        }
    }

    pub fn achievement_rows(&self) -> Vec<AchievementRow> {
        ACHIEVEMENTS
            .iter()
            .map(|a| AchievementRow {
                icon: a.icon,
                title: a.title,
                description: a.description,
                required_streak: a.required_streak,
                unlocked: self.session.is_unlocked(a.id),
            })
            .collect()
    }
}
