// ============================================================================
// FOOTER VIEW - Marca, enlaces, soporte y contadores en vivo
// ============================================================================

use chrono::Datelike;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::utils::{BRAND_NAME, HOME_PATH};
use crate::viewmodels::footer_viewmodel::stats_labels;

pub const FOOTER_RESIDENTS_ID: &str = "footer-residents";
pub const FOOTER_LISTINGS_ID: &str = "footer-listings";

const TAGLINE: &str =
    "The premier digital hub for our town. Connecting businesses with residents since 2024.";
const STATS_HEADING: &str = "Stats";

const QUICK_LINKS: [(&str, &str); 4] = [
    ("/directory", "Directory"),
    ("/explore", "Explore"),
    ("/realestate", "Real Estate"),
    ("/jobs", "Careers"),
];

const SUPPORT_LINKS: [(&str, &str); 4] = [
    ("/about", "About Us"),
    ("/contact", "Contact"),
    ("/advertise", "Advertise"),
    ("/admin", "Staff Access"),
];

pub fn render_footer(state: &AppState) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?
        .class("footer__grid")
        .child(render_brand_column()?)?
        .child(render_link_column("Quick Links", &QUICK_LINKS)?)?
        .child(render_link_column("Support", &SUPPORT_LINKS)?)?
        .child(render_stats_column(state)?)?
        .build();

    let year = chrono::Local::now().year();
    let copyright = ElementBuilder::new("div")?
        .class("footer__bottom")
        .text(&format!("© {} {} Portal. All Rights Reserved.", year, BRAND_NAME))
        .build();

    Ok(ElementBuilder::new("footer")?
        .class("app-footer")
        .child(grid)?
        .child(copyright)?
        .build())
}

fn render_brand_column() -> Result<Element, JsValue> {
    let mark = ElementBuilder::new("div")?.class("brand__mark").text("M").build();
    let name = ElementBuilder::new("span")?.class("footer__brand").text(BRAND_NAME).build();
    let title = ElementBuilder::new("a")?
        .class("brand")
        .route(HOME_PATH)?
        .child(mark)?
        .child(name)?
        .build();
    let tagline = ElementBuilder::new("p")?
        .class("footer__tagline")
        .text(TAGLINE)
        .build();

    Ok(ElementBuilder::new("div")?
        .class("footer__column")
        .child(title)?
        .child(tagline)?
        .build())
}

fn render_link_column(heading: &str, links: &[(&str, &str)]) -> Result<Element, JsValue> {
    let mut list = ElementBuilder::new("ul")?.class("footer__links");
    for (path, label) in links {
        let anchor = ElementBuilder::new("a")?.route(path)?.text(label).build();
        list = list.child(ElementBuilder::new("li")?.child(anchor)?.build())?;
    }

    Ok(ElementBuilder::new("div")?
        .class("footer__column")
        .child(ElementBuilder::new("h4")?.text(heading).build())?
        .child(list.build())?
        .build())
}

/// Los ids permiten a `update_footer_stats` tocar solo el texto
fn render_stats_column(state: &AppState) -> Result<Element, JsValue> {
    let (residents, listings) = stats_labels(state);

    let residents_value = ElementBuilder::new("p")?
        .id(FOOTER_RESIDENTS_ID)?
        .class("stat__value")
        .text(&residents)
        .build();
    let listings_value = ElementBuilder::new("p")?
        .id(FOOTER_LISTINGS_ID)?
        .class("stat__value")
        .text(&listings)
        .build();

    let residents_card = ElementBuilder::new("div")?
        .class("stat")
        .child(residents_value)?
        .child(ElementBuilder::new("p")?.class("stat__label").text("Residents reached").build())?
        .build();
    let listings_card = ElementBuilder::new("div")?
        .class("stat")
        .child(listings_value)?
        .child(ElementBuilder::new("p")?.class("stat__label").text("Live listings").build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("footer__column")
        .child(ElementBuilder::new("h4")?.text(STATS_HEADING).build())?
        .child(residents_card)?
        .child(listings_card)?
        .build())
}
