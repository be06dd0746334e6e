// ============================================================================
// VIEWS - Renderizado del shell (navbar + página + footer)
// ============================================================================

pub mod footer;
pub mod icons;
pub mod navbar;
pub mod pages;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::RouteResolution;
use crate::state::AppState;

pub use footer::render_footer;
pub use navbar::render_navbar;
pub use pages::render_page;

pub const MAIN_ID: &str = "app-main";

/// Shell completo. Una redirección nunca llega aquí; si llega, main vacío.
pub fn render_app(state: &AppState, resolution: &RouteResolution) -> Result<Element, JsValue> {
    let main = ElementBuilder::new("main")?.id(MAIN_ID)?.class("app-main").build();
    if let RouteResolution::Render(route) = resolution {
        let page = render_page(state, route)?;
        append_child(&main, &page)?;
    }

    Ok(ElementBuilder::new("div")?
        .class("app-shell")
        .child(render_navbar(state)?)?
        .child(main)?
        .child(render_footer(state)?)?
        .build())
}
