// ============================================================================
// NAVBAR STATE - Estado de presentación del navbar (nunca se persiste)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct NavbarState {
    pub scrolled: Rc<RefCell<bool>>,
    pub mobile_menu_open: Rc<RefCell<bool>>,
    pub user_dropdown_open: Rc<RefCell<bool>>,
}

impl NavbarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        *self.scrolled.borrow()
    }

    /// Retorna true si el valor cambió
    pub fn set_scrolled(&self, scrolled: bool) -> bool {
        let mut current = self.scrolled.borrow_mut();
        let changed = *current != scrolled;
        *current = scrolled;
        changed
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        *self.mobile_menu_open.borrow()
    }

    pub fn set_mobile_menu_open(&self, open: bool) {
        *self.mobile_menu_open.borrow_mut() = open;
    }

    pub fn is_user_dropdown_open(&self) -> bool {
        *self.user_dropdown_open.borrow()
    }

    pub fn set_user_dropdown_open(&self, open: bool) {
        *self.user_dropdown_open.borrow_mut() = open;
    }
}
