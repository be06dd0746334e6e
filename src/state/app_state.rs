// ============================================================================
// APP STATE - Estado del shell, propiedad única del App
// ============================================================================
// Se pasa explícitamente (clonando los Rc) a viewmodels y vistas; no hay
// estado global ambiente.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{FooterState, NavbarState, SessionState};

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (login/logout, cambio de ruta)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Reconstruir el navbar (menús abiertos/cerrados)
    Navbar,
    /// Solo las clases de scroll del navbar
    NavbarScroll,
    /// Solo los contadores del footer
    FooterStats,
}

type ChangeSubscriber = Rc<dyn Fn(UpdateType)>;

#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub navbar: NavbarState,
    pub footer: FooterState,

    /// Path actual (derivado del fragmento de la URL)
    current_path: Rc<RefCell<String>>,

    change_subscribers: Rc<RefCell<Vec<ChangeSubscriber>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            navbar: NavbarState::new(),
            footer: FooterState::new(),
            current_path: Rc::new(RefCell::new("/".to_string())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_path(&self) -> String {
        self.current_path.borrow().clone()
    }

    pub fn set_current_path(&self, path: String) {
        *self.current_path.borrow_mut() = path;
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers con el tipo de actualización
    pub fn notify(&self, update: UpdateType) {
        // Copia de la lista: un subscriber puede suscribir a otros
        let subscribers: Vec<ChangeSubscriber> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(update);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
