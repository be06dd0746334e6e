/// Claves de localStorage (sin prefijo; el store antepone `storage_prefix`)
pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "current_user";
pub const TOWN_STATS_KEY: &str = "town_stats";

/// Ruta a la que redirige el gate de /admin
pub const AUTH_PATH: &str = "/auth";
pub const HOME_PATH: &str = "/";

pub const BRAND_NAME: &str = "ManaDHONE";

/// Atributo usado por la delegación de clicks
pub const ACTION_ATTR: &str = "data-action";
