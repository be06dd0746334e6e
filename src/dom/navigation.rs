// ============================================================================
// NAVIGATION - Lectura/escritura de la ruta en el fragmento de la URL
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::window;
use crate::router::{hash_href, path_from_hash};

/// Path actual según `location.hash`
pub fn current_hash_path() -> String {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    path_from_hash(&hash)
}

/// Navega añadiendo entrada al historial (dispara `hashchange`)
pub fn push_route(path: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    win.location().set_hash(&hash_href(path))
}

/// Reemplaza la entrada actual del historial. No dispara `hashchange`:
/// quien llama debe re-resolver la ruta.
pub fn replace_route(path: &str) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    win.history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&hash_href(path)))
}
