use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    /// Periodo de refresco de las estadísticas del footer
    pub stats_poll_interval_ms: u32,
    /// Desplazamiento vertical a partir del cual el navbar se compacta
    pub scroll_threshold_px: f64,
    pub storage_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            stats_poll_interval_ms: 5000,
            scroll_threshold_px: 10.0,
            storage_prefix: "manadhone".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            stats_poll_interval_ms: option_env!("STATS_POLL_INTERVAL_MS")
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.stats_poll_interval_ms),
            scroll_threshold_px: option_env!("SCROLL_THRESHOLD_PX")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.scroll_threshold_px),
            storage_prefix: option_env!("STORAGE_PREFIX")
                .map(str::to_string)
                .unwrap_or(defaults.storage_prefix),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_portal_behaviour() {
        let config = AppConfig::default();
        assert_eq!(config.stats_poll_interval_ms, 5000);
        assert_eq!(config.scroll_threshold_px, 10.0);
        assert_eq!(config.storage_prefix, "manadhone");
    }
}
