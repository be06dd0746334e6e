// ============================================================================
// ROUTE GATE - Sustituye /admin por una redirección según el rol en memoria
// ============================================================================
// Es una comodidad de navegación del cliente, NO una frontera de seguridad:
// la copia del usuario en memoria no es autoritativa. La autorización real
// corresponde al Session Store / backend.
// ============================================================================

use crate::models::User;
use crate::router::route::Route;
use crate::utils::AUTH_PATH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResolution {
    Render(Route),
    /// Redirección; `replace` indica reemplazar la entrada del historial
    Redirect { to: &'static str, replace: bool },
    NotFound,
}

/// Resuelve un path contra la tabla de rutas aplicando el gate de /admin
pub fn resolve(path: &str, user: Option<&User>) -> RouteResolution {
    let Some(route) = Route::recognize(path) else {
        log::warn!("🧭 [ROUTER] Ninguna ruta coincide con {}", path);
        return RouteResolution::NotFound;
    };

    if route.requires_admin() && !user.is_some_and(User::is_admin) {
        log::info!("🔒 [ROUTER] {} requiere rol admin, redirigiendo a {}", path, AUTH_PATH);
        return RouteResolution::Redirect {
            to: AUTH_PATH,
            replace: true,
        };
    }

    RouteResolution::Render(route)
}
