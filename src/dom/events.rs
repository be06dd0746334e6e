// ============================================================================
// EVENT HANDLING - Listeners con liberación garantizada
// ============================================================================
// Los listeners globales (window) se registran con un guard: al soltarlo se
// llama a removeEventListener y se libera el Closure. Nada de forget().
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent};

/// Listener registrado sobre un EventTarget; se elimina en Drop
pub struct EventListener {
    target: EventTarget,
    event_type: String,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Crear event listener genérico
    pub fn new<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type: event_type.to_string(),
            closure,
        })
    }

    /// Listener de click con el MouseEvent ya convertido
    pub fn click<F>(target: &EventTarget, mut handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        Self::new(target, "click", move |event: Event| {
            if let Ok(mouse) = event.dyn_into::<MouseEvent>() {
                handler(mouse);
            }
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            &self.event_type,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
