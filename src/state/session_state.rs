// ============================================================================
// SESSION STATE - Copia en memoria (no autoritativa) del usuario actual
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;

#[derive(Clone, Default)]
pub struct SessionState {
    user: Rc<RefCell<Option<User>>>,
    /// Mensaje del último intento de login fallido (página /auth)
    auth_error: Rc<RefCell<Option<String>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtener usuario
    pub fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Solo el ShellViewModel escribe aquí (carga inicial, login, logout)
    pub(crate) fn set_user(&self, user: Option<User>) {
        *self.user.borrow_mut() = user;
    }

    pub fn auth_error(&self) -> Option<String> {
        self.auth_error.borrow().clone()
    }

    pub fn set_auth_error(&self, message: Option<String>) {
        *self.auth_error.borrow_mut() = message;
    }
}
