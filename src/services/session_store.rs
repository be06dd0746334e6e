// ============================================================================
// SESSION STORE - Contrato del colaborador de persistencia
// ============================================================================
// El shell solo conoce este trait. La autorización real (roles) vive detrás
// de esta frontera; lo que el shell haga con el rol es solo navegación.
// ============================================================================

use thiserror::Error;

use crate::models::{TownStats, User};
use crate::utils::StorageError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub trait SessionStore {
    /// Usuario con sesión abierta. Los fallos de lectura se enmascaran como None.
    fn current_user(&self) -> Option<User>;

    fn login(&self, username: &str, password: &str) -> Result<User, StoreError>;

    fn logout(&self);

    /// Estadísticas actuales. Los fallos de lectura devuelven valores por defecto.
    fn town_stats(&self) -> TownStats;
}
