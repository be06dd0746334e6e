use std::cell::RefCell;
use std::rc::Rc;

use crate::models::TownStats;

/// Snapshot de estadísticas mostrado por el footer
#[derive(Clone, Default)]
pub struct FooterState {
    stats: Rc<RefCell<Option<TownStats>>>,
}

impl FooterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Option<TownStats> {
        self.stats.borrow().clone()
    }

    /// Reemplaza el snapshot completo (sin merge)
    pub fn replace_stats(&self, stats: TownStats) {
        *self.stats.borrow_mut() = Some(stats);
    }
}
