// ============================================================================
// NAVBAR VIEW - Navegación principal, menú de cuenta y overlay móvil
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{add_class, append_child, ElementBuilder};
use crate::models::User;
use crate::state::AppState;
use crate::utils::{AUTH_PATH, HOME_PATH};
use crate::viewmodels::navbar_viewmodel::{
    account_label, account_menu_visible, nav_link_class, PRIMARY_LINKS,
};
use crate::viewmodels::UiAction;
use crate::views::icons::{ICON_CLOSE, ICON_EXIT, ICON_MENU, ICON_USER_AVATAR};

pub const NAVBAR_ID: &str = "app-navbar";

/// Renderizar navbar completo
pub fn render_navbar(state: &AppState) -> Result<Element, JsValue> {
    let current_path = state.current_path();
    let user = state.session.user();
    let mobile_open = state.navbar.is_mobile_menu_open();

    let nav = ElementBuilder::new("nav")?
        .id(NAVBAR_ID)?
        .class("navbar")
        .build();
    if state.navbar.is_scrolled() {
        add_class(&nav, "navbar--scrolled")?;
    }

    let container = ElementBuilder::new("div")?
        .class("navbar__container")
        .child(render_brand()?)?
        .build();

    // Enlaces de escritorio
    let mut desktop = ElementBuilder::new("div")?.class("navbar__links");
    for link in PRIMARY_LINKS {
        let anchor = ElementBuilder::new("a")?
            .class(nav_link_class(&current_path, link.path))
            .route(link.path)?
            .text(link.label)
            .build();
        desktop = desktop.child(anchor)?;
    }
    let divider = ElementBuilder::new("div")?.class("navbar__divider").build();
    let desktop = desktop
        .child(divider)?
        .child(render_session_control(state, user.as_ref())?)?
        .build();
    append_child(&container, &desktop)?;

    // Toggle móvil
    let toggle = ElementBuilder::new("button")?
        .class("navbar__mobile-toggle")
        .attr("type", "button")?
        .attr("aria-label", "Menu")?
        .attr("aria-expanded", if mobile_open { "true" } else { "false" })?
        .action(UiAction::ToggleMobileMenu)?
        .html(if mobile_open { ICON_CLOSE } else { ICON_MENU })
        .build();
    append_child(&container, &toggle)?;

    append_child(&nav, &container)?;

    if mobile_open {
        let mobile_menu = render_mobile_menu(&current_path, user.as_ref())?;
        append_child(&nav, &mobile_menu)?;
    }

    Ok(nav)
}

fn render_brand() -> Result<Element, JsValue> {
    let mark = ElementBuilder::new("div")?.class("brand__mark").text("M").build();
    let accent = ElementBuilder::new("span")?.class("brand__accent").text("DHONE").build();
    let name = ElementBuilder::new("span")?
        .class("brand__name")
        .text("Mana")
        .child(accent)?
        .build();

    Ok(ElementBuilder::new("a")?
        .class("brand")
        .route(HOME_PATH)?
        .action(UiAction::CloseMobileMenu)?
        .child(mark)?
        .child(name)?
        .build())
}

/// Botón de cuenta (con menú) o llamada a "Sign In"
fn render_session_control(state: &AppState, user: Option<&User>) -> Result<Element, JsValue> {
    let Some(user) = user else {
        return Ok(ElementBuilder::new("a")?
            .class("btn-signin")
            .route(AUTH_PATH)?
            .text("Sign In")
            .build());
    };

    let icon = ElementBuilder::new("span")?.class("icon").html(ICON_USER_AVATAR).build();
    let label = ElementBuilder::new("span")?.text(account_label(user)).build();
    let trigger = ElementBuilder::new("button")?
        .class("account__trigger")
        .attr("type", "button")?
        .action(UiAction::ToggleUserDropdown)?
        .child(icon)?
        .child(label)?
        .build();

    let account = ElementBuilder::new("div")?
        .class("account")
        .child(trigger)?
        .build();

    if account_menu_visible(state) {
        let menu = render_account_menu(user)?;
        append_child(&account, &menu)?;
    }
    Ok(account)
}

fn render_account_menu(user: &User) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("account__header")
        .child(ElementBuilder::new("p")?.class("account__caption").text("Account").build())?
        .child(ElementBuilder::new("p")?.class("account__email").text(&user.email).build())?
        .build();

    let dashboard = ElementBuilder::new("a")?
        .class("account__item")
        .route("/admin")?
        .action(UiAction::CloseUserDropdown)?
        .text("Dashboard")
        .build();
    let saved = ElementBuilder::new("a")?
        .class("account__item")
        .route("/saved")?
        .action(UiAction::CloseUserDropdown)?
        .text("Saved Items")
        .build();

    let exit_icon = ElementBuilder::new("span")?.class("icon").html(ICON_EXIT).build();
    let sign_out = ElementBuilder::new("button")?
        .class("account__item account__item--danger")
        .attr("type", "button")?
        .action(UiAction::SignOut)?
        .child(exit_icon)?
        .child(ElementBuilder::new("span")?.text("Sign Out").build())?
        .build();

    ElementBuilder::new("div")?
        .class("account__menu")
        .children([header, dashboard, saved, sign_out])
        .map(ElementBuilder::build)
}

/// Overlay de pantalla completa; cada enlace cierra el menú
fn render_mobile_menu(current_path: &str, user: Option<&User>) -> Result<Element, JsValue> {
    let mut list = ElementBuilder::new("div")?.class("mobile-menu__links");
    for link in PRIMARY_LINKS {
        let anchor = ElementBuilder::new("a")?
            .class(&format!("mobile-link {}", nav_link_class(current_path, link.path)))
            .route(link.path)?
            .action(UiAction::CloseMobileMenu)?
            .text(link.mobile_label)
            .build();
        list = list.child(anchor)?;
    }

    let session = ElementBuilder::new("div")?.class("mobile-menu__session").build();
    match user {
        Some(_) => {
            let dashboard = ElementBuilder::new("a")?
                .class("btn-block btn-primary")
                .route("/admin")?
                .action(UiAction::CloseMobileMenu)?
                .text("Dashboard")
                .build();
            let sign_out = ElementBuilder::new("button")?
                .class("btn-block btn-danger")
                .attr("type", "button")?
                .action(UiAction::SignOut)?
                .text("Sign Out")
                .build();
            append_child(&session, &dashboard)?;
            append_child(&session, &sign_out)?;
        }
        None => {
            let sign_in = ElementBuilder::new("a")?
                .class("btn-block btn-primary")
                .route(AUTH_PATH)?
                .action(UiAction::CloseMobileMenu)?
                .text("Sign In")
                .build();
            append_child(&session, &sign_in)?;
        }
    }

    Ok(ElementBuilder::new("div")?
        .class("mobile-menu")
        .child(list.build())?
        .child(session)?
        .build())
}
