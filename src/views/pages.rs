// ============================================================================
// PAGES - Contenido del área principal por ruta
// ============================================================================
// Las páginas de contenido son marcadores; la página /auth lleva el
// formulario de acceso que consume el Session Store.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::AppState;
use crate::utils::HOME_PATH;
use crate::viewmodels::UiAction;

pub const LOGIN_USERNAME_ID: &str = "login-username";
pub const LOGIN_PASSWORD_ID: &str = "login-password";

pub fn render_page(state: &AppState, route: &Route) -> Result<Element, JsValue> {
    match route {
        Route::Auth => render_auth_page(state),
        Route::Admin => render_admin_page(state),
        other => render_placeholder(other),
    }
}

fn render_placeholder(route: &Route) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h1")?.class("page__title").text(&route.title()).build();
    Ok(ElementBuilder::new("section")?
        .class("page")
        .attr("data-route", &route.path())?
        .child(title)?
        .build())
}

fn render_auth_page(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("section")?.class("page page--auth");

    if let Some(user) = state.session.user() {
        let note = ElementBuilder::new("p")?
            .text(&format!("You are signed in as {}.", user.name))
            .build();
        let home = ElementBuilder::new("a")?
            .class("btn-primary")
            .route(HOME_PATH)?
            .text("Back to Home")
            .build();
        return Ok(page.child(note)?.child(home)?.build());
    }

    let username = ElementBuilder::new("input")?
        .id(LOGIN_USERNAME_ID)?
        .class("input")
        .attr("type", "text")?
        .attr("placeholder", "Username")?
        .attr("autocomplete", "username")?
        .build();
    let password = ElementBuilder::new("input")?
        .id(LOGIN_PASSWORD_ID)?
        .class("input")
        .attr("type", "password")?
        .attr("placeholder", "Password")?
        .attr("autocomplete", "current-password")?
        .build();
    let submit = ElementBuilder::new("button")?
        .class("btn-primary btn-block")
        .attr("type", "button")?
        .action(UiAction::SubmitLogin)?
        .text("Sign In")
        .build();

    let mut card = ElementBuilder::new("div")?
        .class("auth-card")
        .child(ElementBuilder::new("h1")?.class("page__title").text("Sign In").build())?
        .child(username)?
        .child(password)?;
    if let Some(message) = state.session.auth_error() {
        card = card.child(ElementBuilder::new("p")?.class("auth-error").text(&message).build())?;
    }
    let card = card.child(submit)?.build();

    Ok(page.child(card)?.build())
}

fn render_admin_page(state: &AppState) -> Result<Element, JsValue> {
    let name = state
        .session
        .user()
        .map(|user| user.name)
        .unwrap_or_default();

    Ok(ElementBuilder::new("section")?
        .class("page page--admin")
        .child(ElementBuilder::new("h1")?.class("page__title").text("Dashboard").build())?
        .child(ElementBuilder::new("p")?.text(&format!("Welcome back, {}.", name)).build())?
        .build())
}
