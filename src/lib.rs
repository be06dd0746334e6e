// ============================================================================
// MANADHONE PORTAL - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI (testeables sin navegador)
// - Services: Session Store, scheduler y scroll inyectables
// - State: State Management con Rc<RefCell>
// - Router: Tabla de rutas + gate de /admin
// - Models: Entidades compartidas del portal
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::{needs_full_render, App};
use crate::config::CONFIG;
use crate::state::app_state::UpdateType;

// Instancia única de la App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 ManaDHONE Portal ({})", CONFIG.environment);

    let app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Aplica una actualización; si la incremental no encuentra su nodo, hace
/// re-render completo
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let app_ref = app_cell.borrow();
        let Some(app) = app_ref.as_ref() else {
            log::warn!("⚠️ [UPDATE] App no está inicializada");
            return;
        };

        let result = match update_type {
            UpdateType::Incremental(inc_type) => {
                log::debug!("🔄 [UPDATE] Actualización incremental: {:?}", inc_type);
                match app.update_incremental(inc_type) {
                    Err(e) if needs_full_render(&e) => {
                        log::debug!("🔄 [UPDATE] Cambiando a re-render completo");
                        app.render()
                    }
                    other => other,
                }
            }
            UpdateType::FullRender => {
                log::debug!("🔄 [RERENDER] Re-render completo");
                app.render()
            }
        };

        if let Err(e) = result {
            log::error!("❌ [UPDATE] Error actualizando la UI: {:?}", e);
        }
    });
}
