// ============================================================================
// SCROLL SOURCE - Suscripción al scroll del viewport
// ============================================================================

use crate::dom::EventListener;
use crate::services::scheduler::Subscription;

pub trait ScrollSource {
    /// Llama a `on_scroll` con el desplazamiento vertical (px) en cada evento
    fn subscribe(&self, on_scroll: Box<dyn Fn(f64)>) -> Subscription;
}

/// Scroll de `window`
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn subscribe(&self, on_scroll: Box<dyn Fn(f64)>) -> Subscription {
        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ [SCROLL] Sin window, no hay suscripción de scroll");
            return Subscription::new(|| ());
        };

        let win = window.clone();
        let listener = EventListener::new(&window, "scroll", move |_event| {
            let offset = win.scroll_y().unwrap_or(0.0);
            on_scroll(offset);
        });

        match listener {
            Ok(listener) => Subscription::new(move || drop(listener)),
            Err(e) => {
                log::error!("❌ [SCROLL] No se pudo registrar el listener: {:?}", e);
                Subscription::new(|| ())
            }
        }
    }
}
