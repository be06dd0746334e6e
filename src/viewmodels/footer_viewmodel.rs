// ============================================================================
// FOOTER VIEWMODEL - Snapshot de estadísticas refrescado por polling
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::{Scheduler, SessionStore, Subscription};
use crate::state::{AppState, IncrementalUpdate, UpdateType};

pub struct FooterViewModel {
    store: Rc<dyn SessionStore>,
    poll_interval_ms: u32,
    poll: RefCell<Option<Subscription>>,
}

impl FooterViewModel {
    pub fn new(store: Rc<dyn SessionStore>, poll_interval_ms: u32) -> Self {
        Self {
            store,
            poll_interval_ms,
            poll: RefCell::new(None),
        }
    }

    /// Snapshot inicial + re-consulta periódica que reemplaza el snapshot entero
    pub fn mount(&self, state: &AppState, scheduler: &dyn Scheduler) {
        if self.is_mounted() {
            log::warn!("⚠️ [FOOTER] mount ya fue llamado, ignorando llamada duplicada");
            return;
        }

        state.footer.replace_stats(self.store.town_stats());

        let store = self.store.clone();
        let state = state.clone();
        log::info!(
            "⏰ [FOOTER] Refresco de estadísticas cada {} ms",
            self.poll_interval_ms
        );
        let subscription = scheduler.every(
            self.poll_interval_ms,
            Box::new(move || {
                state.footer.replace_stats(store.town_stats());
                state.notify(UpdateType::Incremental(IncrementalUpdate::FooterStats));
            }),
        );
        *self.poll.borrow_mut() = Some(subscription);
    }

    pub fn unmount(&self) {
        if self.poll.borrow_mut().take().is_some() {
            log::info!("🧹 [FOOTER] Timer de estadísticas cancelado");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.poll.borrow().is_some()
    }
}

impl Drop for FooterViewModel {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Contadores a mostrar (residents, active listings), tal cual vienen del store
pub fn stats_labels(state: &AppState) -> (String, String) {
    match state.footer.stats() {
        Some(stats) => (stats.residents, stats.active_listings),
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{stats_with, FakeSessionStore, ManualScheduler};

    fn mounted(store: &Rc<FakeSessionStore>, scheduler: &ManualScheduler) -> (FooterViewModel, AppState) {
        let vm = FooterViewModel::new(store.clone(), 5000);
        let state = AppState::new();
        vm.mount(&state, scheduler);
        (vm, state)
    }

    #[test]
    fn shows_first_query_then_second_after_one_interval() {
        let store = Rc::new(FakeSessionStore::new());
        store.queue_stats(stats_with("1,204", "37"));
        store.queue_stats(stats_with("1,210", "39"));
        let scheduler = ManualScheduler::new();
        let (_vm, state) = mounted(&store, &scheduler);

        assert_eq!(stats_labels(&state), ("1,204".to_string(), "37".to_string()));

        scheduler.advance(4999);
        assert_eq!(stats_labels(&state), ("1,204".to_string(), "37".to_string()));

        scheduler.advance(1);
        assert_eq!(stats_labels(&state), ("1,210".to_string(), "39".to_string()));
        assert_eq!(store.stats_calls.get(), 2);
    }

    #[test]
    fn each_tick_replaces_snapshot_wholesale() {
        let store = Rc::new(FakeSessionStore::new());
        let mut first = stats_with("1,204", "37");
        first.daily_visitors = "300".to_string();
        store.queue_stats(first);
        store.queue_stats(stats_with("1,210", "39"));
        let scheduler = ManualScheduler::new();
        let (_vm, state) = mounted(&store, &scheduler);

        scheduler.advance(5000);
        let shown = state.footer.stats().unwrap();
        assert_eq!(shown, stats_with("1,210", "39"));
    }

    #[test]
    fn ticks_notify_incremental_footer_update() {
        let store = Rc::new(FakeSessionStore::new());
        let scheduler = ManualScheduler::new();
        let (_vm, state) = mounted(&store, &scheduler);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        state.subscribe_to_changes(move |update| sink.borrow_mut().push(update));

        scheduler.advance(15_000);

        assert_eq!(
            *seen.borrow(),
            vec![UpdateType::Incremental(IncrementalUpdate::FooterStats); 3]
        );
    }

    #[test]
    fn mount_then_unmount_leaves_no_active_timer() {
        let store = Rc::new(FakeSessionStore::new());
        let scheduler = ManualScheduler::new();
        let vm = FooterViewModel::new(store.clone(), 5000);
        let state = AppState::new();

        for _ in 0..3 {
            vm.mount(&state, &scheduler);
            assert_eq!(scheduler.active_count(), 1);
            vm.unmount();
            assert_eq!(scheduler.active_count(), 0);
        }

        let calls_before = store.stats_calls.get();
        scheduler.advance(60_000);
        assert_eq!(store.stats_calls.get(), calls_before);
    }

    #[test]
    fn dropping_viewmodel_cancels_timer() {
        let store = Rc::new(FakeSessionStore::new());
        let scheduler = ManualScheduler::new();
        let (vm, _state) = mounted(&store, &scheduler);
        assert_eq!(scheduler.active_count(), 1);
        drop(vm);
        assert_eq!(scheduler.active_count(), 0);
    }
}
