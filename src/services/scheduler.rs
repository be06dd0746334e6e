// ============================================================================
// SCHEDULER - Tareas periódicas inyectables
// ============================================================================
// Los componentes no llaman a setInterval directamente: reciben un Scheduler
// para que los tests puedan avanzar un reloj manual.
// ============================================================================

use gloo_timers::callback::Interval;

/// Guard de una suscripción (timer, listener...). Se libera al hacer drop.
#[must_use = "la suscripción se cancela al soltar el guard"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Cancelar explícitamente (equivalente a drop)
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

pub trait Scheduler {
    /// Ejecuta `task` cada `period_ms` hasta que se suelte la suscripción
    fn every(&self, period_ms: u32, task: Box<dyn Fn()>) -> Subscription;
}

/// Scheduler del navegador sobre `setInterval`
#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    fn every(&self, period_ms: u32, task: Box<dyn Fn()>) -> Subscription {
        let interval = Interval::new(period_ms, move || task());
        // Interval hace clearInterval en su Drop
        Subscription::new(move || drop(interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn release_runs_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        assert_eq!(released.get(), 0);
        sub.cancel();
        assert_eq!(released.get(), 1);
    }
}
