use super::*;

impl QuizApp {
    /// Aplica la escritura pendiente. Es best-effort: un fallo se registra
    /// y el juego sigue.
    pub fn flush_progress(&mut self, storage: &mut dyn eframe::Storage) {
        match self.pending_write.take() {
            Some(PendingWrite::Save) => self.save_progress(storage),
            Some(PendingWrite::Clear) => {
                storage::clear(storage);
                log::info!("Progreso borrado");
            }
            None => {}
        }
    }

    pub fn save_progress(&self, storage: &mut dyn eframe::Storage) {
        if let Err(e) = storage::save(storage, &self.session) {
            log::error!("No se pudo guardar el progreso: {e}");
        }
    }
}
