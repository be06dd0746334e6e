// ============================================================================
// APP - Aplicación principal: raíz DOM, listeners delegados y render
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::incremental::{update_footer_stats, update_navbar, update_navbar_scroll};
use crate::dom::{
    append_child, closest_with_attribute, current_hash_path, get_element_by_id, input_value,
    push_route, replace_route, set_inner_html, window, EventListener,
};
use crate::router::RouteResolution;
use crate::services::{open_browser_store, IntervalScheduler, WindowScroll};
use crate::state::app_state::IncrementalUpdate;
use crate::utils::{ACTION_ATTR, HOME_PATH};
use crate::viewmodels::{ShellViewModel, UiAction};
use crate::views::pages::{LOGIN_PASSWORD_ID, LOGIN_USERNAME_ID};
use crate::views::render_app;

pub const ROOT_ID: &str = "app";

/// Aplicación principal
pub struct App {
    shell: Rc<ShellViewModel>,
    root: Element,
    // Guards: al soltar el App se quitan los listeners
    _hash_listener: EventListener,
    _click_listener: EventListener,
}

impl App {
    /// Crear nueva aplicación y montar suscripciones (scroll + polling)
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;
        let win = window().ok_or_else(|| JsValue::from_str("No window"))?;

        let shell = Rc::new(ShellViewModel::new(open_browser_store(), &CONFIG));

        // Batch de updates: cada cambio se aplica en el siguiente tick
        shell.state().subscribe_to_changes(|update| {
            gloo_timers::callback::Timeout::new(0, move || {
                crate::rerender_app_with_type(update);
            })
            .forget();
        });

        let hash_listener = EventListener::new(&win, "hashchange", |_event| {
            log::info!("🧭 [APP] hashchange -> {}", current_hash_path());
            crate::rerender_app();
        })?;

        let click_shell = shell.clone();
        let click_listener = EventListener::click(&root, move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(action_el) = closest_with_attribute(&target, ACTION_ATTR) else {
                return;
            };
            let Some(raw) = action_el.get_attribute(ACTION_ATTR) else {
                return;
            };
            match raw.parse::<UiAction>() {
                Ok(UiAction::SubmitLogin) => submit_login(&click_shell),
                Ok(action) => click_shell.dispatch(action),
                Err(e) => log::warn!("⚠️ [APP] {}", e),
            }
        })?;

        shell.mount(&WindowScroll, &IntervalScheduler);
        log::info!("✅ [APP] Shell montado");

        Ok(Self {
            shell,
            root,
            _hash_listener: hash_listener,
            _click_listener: click_listener,
        })
    }

    /// Re-render completo del shell para la ruta actual
    pub fn render(&self) -> Result<(), JsValue> {
        let resolution = self.resolve_current_route()?;
        set_inner_html(&self.root, "");
        let app_view = render_app(self.shell.state(), &resolution)?;
        append_child(&self.root, &app_view)?;
        Ok(())
    }

    /// Resuelve el fragmento actual. Una redirección reescribe la URL y se
    /// resuelve de nuevo sin pasar por `hashchange`.
    fn resolve_current_route(&self) -> Result<RouteResolution, JsValue> {
        let path = current_hash_path();
        match self.shell.navigate(&path) {
            RouteResolution::Redirect { to, replace } => {
                if replace {
                    replace_route(to)?;
                } else {
                    push_route(to)?;
                }
                Ok(self.shell.navigate(to))
            }
            resolution => Ok(resolution),
        }
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        let state = self.shell.state();
        match update_type {
            IncrementalUpdate::Navbar => update_navbar(state),
            IncrementalUpdate::NavbarScroll => update_navbar_scroll(state),
            IncrementalUpdate::FooterStats => update_footer_stats(state),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shell.unmount();
        log::info!("🧹 [APP] App desmontada");
    }
}

/// Lee el formulario de /auth; con login correcto vuelve a la home
fn submit_login(shell: &ShellViewModel) {
    let username = input_value(LOGIN_USERNAME_ID);
    let password = input_value(LOGIN_PASSWORD_ID);
    if shell.submit_login(&username, &password).is_ok() {
        if let Err(e) = push_route(HOME_PATH) {
            log::error!("❌ [APP] Error navegando tras login: {:?}", e);
        }
    }
}

/// El render puede cambiar entre updates encolados; si no existe la pieza a
/// actualizar se hace render completo.
pub(crate) fn needs_full_render(error: &JsValue) -> bool {
    error
        .as_string()
        .is_some_and(|message| message.contains("needs full render"))
}
