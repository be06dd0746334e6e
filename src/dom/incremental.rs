// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza elementos específicos que cambiaron, sin re-renderizar todo
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{add_class, get_element_by_id, remove_class, set_text_content};
use crate::state::AppState;
use crate::views::footer::{FOOTER_LISTINGS_ID, FOOTER_RESIDENTS_ID};
use crate::views::navbar::{render_navbar, NAVBAR_ID};
use crate::viewmodels::footer_viewmodel::stats_labels;

/// Reemplazar el navbar completo (menús abiertos/cerrados)
pub fn update_navbar(state: &AppState) -> Result<(), JsValue> {
    let Some(current) = get_element_by_id(NAVBAR_ID) else {
        log::warn!("⚠️ [UPDATE] #{} no encontrado, necesita re-render completo", NAVBAR_ID);
        return Err(JsValue::from_str("Navbar not found, needs full render"));
    };
    let fresh = render_navbar(state)?;
    current.replace_with_with_node_1(&fresh)?;
    Ok(())
}

/// Solo las clases que dependen del scroll
pub fn update_navbar_scroll(state: &AppState) -> Result<(), JsValue> {
    if let Some(nav) = get_element_by_id(NAVBAR_ID) {
        if state.navbar.is_scrolled() {
            add_class(&nav, "navbar--scrolled")?;
        } else {
            remove_class(&nav, "navbar--scrolled")?;
        }
    }
    Ok(())
}

/// Solo los contadores del footer (texto opaco tal cual)
pub fn update_footer_stats(state: &AppState) -> Result<(), JsValue> {
    let (residents, listings) = stats_labels(state);
    if let Some(el) = get_element_by_id(FOOTER_RESIDENTS_ID) {
        set_text_content(&el, &residents);
    }
    if let Some(el) = get_element_by_id(FOOTER_LISTINGS_ID) {
        set_text_content(&el, &listings);
    }
    Ok(())
}
