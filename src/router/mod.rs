// ============================================================================
// ROUTER - Routing por fragmento (#/path) bajo un único entry point
// ============================================================================

pub mod route;
pub mod guard;

pub use route::{hash_href, path_from_hash, Route};
pub use guard::{resolve, RouteResolution};
