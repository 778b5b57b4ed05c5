use crate::achievements::AchievementId;

/// Aviso de logro programado. Caduca solo; el tiempo lo pone quien llama
/// (en la app, el reloj de egui), así nunca se bloquea.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toast {
    pub achievement: AchievementId,
    expires_at: f64,
}

#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    /// Programa un aviso nuevo; el anterior, si lo hay, queda cancelado.
    pub fn show(&mut self, achievement: AchievementId, now: f64, duration_secs: f64) {
        self.current = Some(Toast {
            achievement,
            expires_at: now + duration_secs.max(0.0),
        });
    }

    pub fn cancel(&mut self) {
        self.current = None;
    }

    /// Aviso vigente en `now`. Si ya caducó se descarta.
    pub fn active(&mut self, now: f64) -> Option<Toast> {
        if self.current.is_some_and(|t| now >= t.expires_at) {
            self.current = None;
        }
        self.current
    }

    /// Segundos hasta que caduque el aviso vigente.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.current
            .map(|t| (t.expires_at - now).max(0.0))
            .filter(|r| *r > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_its_duration() {
        let mut slot = ToastSlot::default();
        slot.show(AchievementId::MathRookie, 10.0, 3.0);
        assert!(slot.active(10.0).is_some());
        assert!(slot.active(12.9).is_some());
        assert_eq!(slot.remaining(12.0), Some(1.0));
        assert!(slot.active(13.0).is_none());
        assert!(slot.active(10.0).is_none(), "caducado no vuelve");
    }

    #[test]
    fn newer_toast_replaces_the_old_one() {
        let mut slot = ToastSlot::default();
        slot.show(AchievementId::MathRookie, 0.0, 3.0);
        slot.show(AchievementId::NumberNinja, 2.0, 3.0);
        let t = slot.active(4.0).expect("el nuevo sigue activo");
        assert_eq!(t.achievement, AchievementId::NumberNinja);
    }

    #[test]
    fn cancel_clears_the_slot() {
        let mut slot = ToastSlot::default();
        slot.show(AchievementId::MathMaster, 0.0, 3.0);
        slot.cancel();
        assert!(slot.active(0.5).is_none());
        assert_eq!(slot.remaining(0.5), None);
    }
}
