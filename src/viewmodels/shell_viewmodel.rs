// ============================================================================
// SHELL VIEWMODEL - Composición navbar + router + footer
// ============================================================================
// Dueño único del AppState. Las vistas reciben el estado por parámetro.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::User;
use crate::router::{self, RouteResolution};
use crate::services::{Scheduler, ScrollSource, SessionStore, StoreError};
use crate::state::AppState;
use crate::viewmodels::{FooterViewModel, NavbarViewModel, SessionViewModel, UiAction};

pub struct ShellViewModel {
    state: AppState,
    session: SessionViewModel,
    navbar: NavbarViewModel,
    footer: FooterViewModel,
}

impl ShellViewModel {
    pub fn new(store: Rc<dyn SessionStore>, config: &AppConfig) -> Self {
        Self {
            state: AppState::new(),
            session: SessionViewModel::new(store.clone()),
            navbar: NavbarViewModel::new(config.scroll_threshold_px),
            footer: FooterViewModel::new(store, config.stats_poll_interval_ms),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Carga la sesión y adquiere las suscripciones de navbar y footer
    pub fn mount(&self, scroll: &dyn ScrollSource, scheduler: &dyn Scheduler) {
        self.session.load_session(&self.state);
        self.navbar.mount(&self.state, scroll);
        self.footer.mount(&self.state, scheduler);
    }

    pub fn unmount(&self) {
        self.navbar.unmount();
        self.footer.unmount();
    }

    /// Actualiza el path actual y lo resuelve con el gate de /admin
    pub fn navigate(&self, path: &str) -> RouteResolution {
        self.state.set_current_path(path.to_string());
        let user = self.state.session.user();
        router::resolve(path, user.as_ref())
    }

    pub fn logout(&self) {
        self.session.logout(&self.state);
    }

    pub fn submit_login(&self, username: &str, password: &str) -> Result<User, StoreError> {
        self.session.login(&self.state, username.trim(), password)
    }

    /// Despacha una acción declarada en el DOM. `SubmitLogin` necesita el
    /// formulario y lo gestiona el App con `submit_login`.
    pub fn dispatch(&self, action: UiAction) {
        log::debug!("🖱️ [SHELL] Acción {}", action);
        match action {
            UiAction::ToggleMobileMenu => self.navbar.toggle_mobile_menu(&self.state),
            UiAction::CloseMobileMenu => self.navbar.close_mobile_menu(&self.state),
            UiAction::ToggleUserDropdown => self.navbar.toggle_user_dropdown(&self.state),
            UiAction::CloseUserDropdown => self.navbar.close_user_dropdown(&self.state),
            UiAction::SignOut => self.navbar.sign_out(&self.state, &|| self.logout()),
            UiAction::SubmitLogin => {
                log::warn!("⚠️ [SHELL] submit-login sin formulario, ignorado");
            }
        }
    }
}

impl Drop for ShellViewModel {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::router::Route;
    use crate::test_support::{
        sample_user, stats_with, FakeScrollSource, FakeSessionStore, ManualScheduler,
    };
    use crate::viewmodels::footer_viewmodel::stats_labels;
    use crate::viewmodels::navbar_viewmodel::account_menu_visible;

    fn config() -> AppConfig {
        AppConfig::default()
    }

    #[test]
    fn mounted_shell_routes_admin_by_role() {
        let store = Rc::new(FakeSessionStore::with_user(sample_user(Role::Admin)));
        let shell = ShellViewModel::new(store, &config());
        shell.mount(&FakeScrollSource::new(), &ManualScheduler::new());

        assert_eq!(shell.navigate("/admin"), RouteResolution::Render(Route::Admin));
        assert_eq!(shell.state().current_path(), "/admin");

        shell.logout();
        assert_eq!(
            shell.navigate("/admin"),
            RouteResolution::Redirect { to: "/auth", replace: true }
        );
    }

    #[test]
    fn regular_user_is_sent_to_auth() {
        let store = Rc::new(FakeSessionStore::with_user(sample_user(Role::User)));
        let shell = ShellViewModel::new(store, &config());
        shell.mount(&FakeScrollSource::new(), &ManualScheduler::new());

        assert_eq!(
            shell.navigate("/admin"),
            RouteResolution::Redirect { to: "/auth", replace: true }
        );
    }

    #[test]
    fn sign_out_action_clears_user_and_menu() {
        let store = Rc::new(FakeSessionStore::with_user(sample_user(Role::User)));
        let shell = ShellViewModel::new(store.clone(), &config());
        shell.mount(&FakeScrollSource::new(), &ManualScheduler::new());

        for open_before in [true, false] {
            shell.state().session.set_user(Some(sample_user(Role::User)));
            shell.state().navbar.set_user_dropdown_open(open_before);

            shell.dispatch(UiAction::SignOut);

            assert!(shell.state().session.user().is_none());
            assert!(!account_menu_visible(shell.state()));
        }
        assert_eq!(store.logout_calls.get(), 2);
    }

    #[test]
    fn full_scenario_refreshes_footer_strings() {
        let store = Rc::new(FakeSessionStore::new());
        store.queue_stats(stats_with("1,204", "37"));
        store.queue_stats(stats_with("1,210", "39"));
        let scheduler = ManualScheduler::new();
        let shell = ShellViewModel::new(store, &config());
        shell.mount(&FakeScrollSource::new(), &scheduler);

        assert_eq!(stats_labels(shell.state()).0, "1,204");
        scheduler.advance(5000);
        assert_eq!(
            stats_labels(shell.state()),
            ("1,210".to_string(), "39".to_string())
        );
    }

    #[test]
    fn unmount_releases_every_subscription() {
        let scroll = FakeScrollSource::new();
        let scheduler = ManualScheduler::new();
        let shell = ShellViewModel::new(Rc::new(FakeSessionStore::new()), &config());

        shell.mount(&scroll, &scheduler);
        assert_eq!(scroll.listener_count(), 1);
        assert_eq!(scheduler.active_count(), 1);

        shell.unmount();
        assert_eq!(scroll.listener_count(), 0);
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn login_from_auth_page_unlocks_admin() {
        let store = Rc::new(FakeSessionStore::new());
        store.accounts.borrow_mut().push(sample_user(Role::Admin));
        let shell = ShellViewModel::new(store, &config());
        shell.mount(&FakeScrollSource::new(), &ManualScheduler::new());

        assert!(matches!(shell.navigate("/admin"), RouteResolution::Redirect { .. }));
        shell.submit_login(" ravi ", "pw").unwrap();
        assert_eq!(shell.navigate("/admin"), RouteResolution::Render(Route::Admin));
    }
}
