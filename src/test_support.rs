//! Dobles de prueba: store falso, reloj manual y fuente de scroll controlable.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::models::{Role, TownStats, User};
use crate::services::{Scheduler, ScrollSource, SessionStore, StoreError, Subscription};

pub fn sample_user(role: Role) -> User {
    User {
        id: "u-1".to_string(),
        username: "ravi".to_string(),
        password: "pw".to_string(),
        name: "Ravi Kumar".to_string(),
        email: "ravi@example.com".to_string(),
        role,
    }
}

pub fn stats_with(residents: &str, active_listings: &str) -> TownStats {
    TownStats {
        residents: residents.to_string(),
        active_listings: active_listings.to_string(),
        ..TownStats::default()
    }
}

/// Session Store en memoria que cuenta las llamadas recibidas
#[derive(Default)]
pub struct FakeSessionStore {
    pub user: RefCell<Option<User>>,
    pub accounts: RefCell<Vec<User>>,
    stats_queue: RefCell<VecDeque<TownStats>>,
    last_stats: RefCell<TownStats>,
    pub current_user_calls: Cell<usize>,
    pub logout_calls: Cell<usize>,
    pub stats_calls: Cell<usize>,
}

impl FakeSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: User) -> Self {
        let store = Self::new();
        *store.user.borrow_mut() = Some(user);
        store
    }

    /// Respuestas sucesivas de `town_stats`; la última se repite
    pub fn queue_stats(&self, stats: TownStats) {
        self.stats_queue.borrow_mut().push_back(stats);
    }
}

impl SessionStore for FakeSessionStore {
    fn current_user(&self) -> Option<User> {
        self.current_user_calls.set(self.current_user_calls.get() + 1);
        self.user.borrow().clone()
    }

    fn login(&self, username: &str, password: &str) -> Result<User, StoreError> {
        let found = self
            .accounts
            .borrow()
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
            .ok_or(StoreError::InvalidCredentials)?;
        *self.user.borrow_mut() = Some(found.clone());
        Ok(found)
    }

    fn logout(&self) {
        self.logout_calls.set(self.logout_calls.get() + 1);
        *self.user.borrow_mut() = None;
    }

    fn town_stats(&self) -> TownStats {
        self.stats_calls.set(self.stats_calls.get() + 1);
        if let Some(next) = self.stats_queue.borrow_mut().pop_front() {
            *self.last_stats.borrow_mut() = next;
        }
        self.last_stats.borrow().clone()
    }
}

struct ManualTask {
    period_ms: u64,
    next_due: u64,
    run: Rc<dyn Fn()>,
    active: Rc<Cell<bool>>,
}

/// Scheduler con reloj manual: nada corre hasta `advance`
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    tasks: RefCell<Vec<ManualTask>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.tasks
            .borrow()
            .iter()
            .filter(|t| t.active.get())
            .count()
    }

    /// Avanza el reloj disparando las tareas vencidas en orden
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let due = {
                let mut tasks = self.tasks.borrow_mut();
                let next = tasks
                    .iter_mut()
                    .filter(|t| t.active.get() && t.next_due <= target)
                    .min_by_key(|t| t.next_due);
                next.map(|task| {
                    let at = task.next_due;
                    task.next_due += task.period_ms;
                    (at, task.run.clone())
                })
            };
            match due {
                Some((at, run)) => {
                    self.now.set(at);
                    run();
                }
                None => break,
            }
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period_ms: u32, task: Box<dyn Fn()>) -> Subscription {
        let active = Rc::new(Cell::new(true));
        let period_ms = u64::from(period_ms.max(1));
        self.tasks.borrow_mut().push(ManualTask {
            period_ms,
            next_due: self.now.get() + period_ms,
            run: Rc::from(task),
            active: active.clone(),
        });
        Subscription::new(move || active.set(false))
    }
}

type ScrollCallback = Rc<dyn Fn(f64)>;

/// Fuente de scroll controlada por el test
#[derive(Default)]
pub struct FakeScrollSource {
    listeners: Rc<RefCell<Vec<(u64, ScrollCallback)>>>,
    next_id: Cell<u64>,
}

impl FakeScrollSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn scroll_to(&self, offset: f64) {
        let listeners: Vec<ScrollCallback> =
            self.listeners.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for listener in listeners {
            listener(offset);
        }
    }
}

impl ScrollSource for FakeScrollSource {
    fn subscribe(&self, on_scroll: Box<dyn Fn(f64)>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(on_scroll)));

        let listeners = self.listeners.clone();
        Subscription::new(move || listeners.borrow_mut().retain(|(i, _)| *i != id))
    }
}
