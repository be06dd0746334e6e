// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod session_state;
pub mod navbar_state;
pub mod footer_state;
pub mod app_state;

pub use session_state::*;
pub use navbar_state::*;
pub use footer_state::*;
pub use app_state::*;
