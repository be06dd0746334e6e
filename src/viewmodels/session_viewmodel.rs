// ============================================================================
// SESSION VIEWMODEL - Carga inicial, login y logout
// ============================================================================
// Único punto que escribe el usuario en memoria. Tres disparadores:
// carga inicial, login y logout.
// ============================================================================

use std::rc::Rc;

use crate::models::User;
use crate::services::{SessionStore, StoreError};
use crate::state::{AppState, UpdateType};

pub struct SessionViewModel {
    store: Rc<dyn SessionStore>,
}

impl SessionViewModel {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Consulta el usuario actual una vez (al montar el shell)
    pub fn load_session(&self, state: &AppState) {
        let user = self.store.current_user();
        match &user {
            Some(u) => log::info!("💾 [SESSION] Sesión restaurada para {}", u.username),
            None => log::info!("ℹ️ [SESSION] Sin sesión guardada"),
        }
        state.session.set_user(user);
        state.notify(UpdateType::FullRender);
    }

    /// Login contra el store; en caso de error deja el mensaje para /auth
    pub fn login(&self, state: &AppState, username: &str, password: &str) -> Result<User, StoreError> {
        match self.store.login(username, password) {
            Ok(user) => {
                self.login_success(state, user.clone());
                Ok(user)
            }
            Err(e) => {
                log::warn!("⚠️ [SESSION] Login fallido para {}: {}", username, e);
                state.session.set_auth_error(Some(e.to_string()));
                state.notify(UpdateType::FullRender);
                Err(e)
            }
        }
    }

    pub fn login_success(&self, state: &AppState, user: User) {
        log::info!("✅ [SESSION] Login correcto: {}", user.username);
        state.session.set_auth_error(None);
        state.session.set_user(Some(user));
        state.notify(UpdateType::FullRender);
    }

    /// Fire-and-forget: logout en el store y después limpiar la copia en memoria
    pub fn logout(&self, state: &AppState) {
        log::info!("👋 [SESSION] Logout iniciado");
        self.store.logout();
        state.session.set_user(None);
        state.notify(UpdateType::FullRender);
    }
}
