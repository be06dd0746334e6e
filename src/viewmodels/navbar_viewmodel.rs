// ============================================================================
// NAVBAR VIEWMODEL - Scroll, menú móvil, menú de cuenta y enlace activo
// ============================================================================

use std::cell::RefCell;

use crate::models::User;
use crate::services::{ScrollSource, Subscription};
use crate::state::{AppState, IncrementalUpdate, UpdateType};

/// Enlace principal del navbar (etiqueta escritorio / etiqueta móvil)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub mobile_label: &'static str,
}

pub const PRIMARY_LINKS: [NavLink; 8] = [
    NavLink { path: "/", label: "Home", mobile_label: "Home" },
    NavLink { path: "/directory", label: "Directory", mobile_label: "Directory" },
    NavLink { path: "/explore", label: "Discover", mobile_label: "Explore Dhone" },
    NavLink { path: "/realestate", label: "Property", mobile_label: "Real Estate" },
    NavLink { path: "/jobs", label: "Jobs", mobile_label: "Jobs" },
    NavLink { path: "/freelancers", label: "Freelancers", mobile_label: "Freelancers" },
    NavLink { path: "/stars", label: "Stars", mobile_label: "Dhone Stars" },
    NavLink { path: "/fm", label: "Radio", mobile_label: "Live Radio" },
];

pub const NAV_LINK_ACTIVE_CLASS: &str = "nav-link nav-link--active";
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Enlace activo: igualdad exacta de strings, nunca prefijo
pub fn is_active(current_path: &str, candidate_path: &str) -> bool {
    current_path == candidate_path
}

pub fn nav_link_class(current_path: &str, candidate_path: &str) -> &'static str {
    if is_active(current_path, candidate_path) {
        NAV_LINK_ACTIVE_CLASS
    } else {
        NAV_LINK_CLASS
    }
}

/// Texto del botón de cuenta
pub fn account_label(user: &User) -> &str {
    user.first_name()
}

/// El menú de cuenta solo se renderiza con usuario y desplegado
pub fn account_menu_visible(state: &AppState) -> bool {
    state.session.is_signed_in() && state.navbar.is_user_dropdown_open()
}

pub struct NavbarViewModel {
    scroll_threshold_px: f64,
    scroll_subscription: RefCell<Option<Subscription>>,
}

impl NavbarViewModel {
    pub fn new(scroll_threshold_px: f64) -> Self {
        Self {
            scroll_threshold_px,
            scroll_subscription: RefCell::new(None),
        }
    }

    /// Suscribe al scroll del viewport mientras el navbar esté montado
    pub fn mount(&self, state: &AppState, scroll: &dyn ScrollSource) {
        if self.is_mounted() {
            log::warn!("⚠️ [NAVBAR] mount ya fue llamado, ignorando llamada duplicada");
            return;
        }

        let state = state.clone();
        let threshold = self.scroll_threshold_px;
        let subscription = scroll.subscribe(Box::new(move |offset| {
            if state.navbar.set_scrolled(offset > threshold) {
                state.notify(UpdateType::Incremental(IncrementalUpdate::NavbarScroll));
            }
        }));
        *self.scroll_subscription.borrow_mut() = Some(subscription);
    }

    pub fn unmount(&self) {
        if self.scroll_subscription.borrow_mut().take().is_some() {
            log::info!("🧹 [NAVBAR] Listener de scroll liberado");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.scroll_subscription.borrow().is_some()
    }

    pub fn toggle_mobile_menu(&self, state: &AppState) {
        let open = !state.navbar.is_mobile_menu_open();
        state.navbar.set_mobile_menu_open(open);
        state.notify(UpdateType::Incremental(IncrementalUpdate::Navbar));
    }

    /// Cualquier enlace del overlay cierra el menú
    pub fn close_mobile_menu(&self, state: &AppState) {
        if state.navbar.is_mobile_menu_open() {
            state.navbar.set_mobile_menu_open(false);
            state.notify(UpdateType::Incremental(IncrementalUpdate::Navbar));
        }
    }

    pub fn toggle_user_dropdown(&self, state: &AppState) {
        let open = !state.navbar.is_user_dropdown_open();
        state.navbar.set_user_dropdown_open(open);
        state.notify(UpdateType::Incremental(IncrementalUpdate::Navbar));
    }

    pub fn close_user_dropdown(&self, state: &AppState) {
        if state.navbar.is_user_dropdown_open() {
            state.navbar.set_user_dropdown_open(false);
            state.notify(UpdateType::Incremental(IncrementalUpdate::Navbar));
        }
    }

    /// Invoca el callback de logout inyectado y cierra los menús
    pub fn sign_out(&self, state: &AppState, on_logout: &dyn Fn()) {
        on_logout();
        state.navbar.set_user_dropdown_open(false);
        state.navbar.set_mobile_menu_open(false);
        state.notify(UpdateType::Incremental(IncrementalUpdate::Navbar));
    }
}

impl Drop for NavbarViewModel {
    fn drop(&mut self) {
        self.unmount();
    }
}
