// ============================================================================
// STORAGE SERVICE - Session Store sobre localStorage
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::models::{Role, TownStats, User};
use crate::services::session_store::{SessionStore, StoreError};
use crate::utils::{
    BrowserStorage, MemoryStorage, StorageBackend, CURRENT_USER_KEY, TOWN_STATS_KEY, USERS_KEY,
};

/// Session Store que simula la base de datos del portal en un backend clave/valor
pub struct LocalSessionStore<B: StorageBackend> {
    backend: B,
    prefix: String,
}

impl<B: StorageBackend> LocalSessionStore<B> {
    pub fn new(backend: B, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.load(&self.key(key))? {
            Some(value) => {
                let parsed = serde_json::from_value(value).map_err(crate::utils::StorageError::from)?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_value(value).map_err(crate::utils::StorageError::from)?;
        self.backend.save(&self.key(key), json)?;
        Ok(())
    }

    /// Siembra la cuenta de administración y las estadísticas iniciales si no existen
    pub fn seed_defaults(&self) -> Result<(), StoreError> {
        if self.read::<Vec<User>>(USERS_KEY)?.is_none() {
            log::info!("🌱 [STORE] Sembrando cuenta admin por defecto");
            self.write(USERS_KEY, &vec![default_admin()])?;
        }
        if self.read::<TownStats>(TOWN_STATS_KEY)?.is_none() {
            log::info!("🌱 [STORE] Sembrando estadísticas por defecto");
            let stats = TownStats {
                last_updated: now_millis(),
                ..TownStats::default()
            };
            self.write(TOWN_STATS_KEY, &stats)?;
        }
        Ok(())
    }

    pub fn users(&self) -> Vec<User> {
        match self.read::<Vec<User>>(USERS_KEY) {
            Ok(users) => users.unwrap_or_default(),
            Err(e) => {
                log::warn!("⚠️ [STORE] Lista de usuarios ilegible: {}", e);
                Vec::new()
            }
        }
    }
}

impl<B: StorageBackend> SessionStore for LocalSessionStore<B> {
    fn current_user(&self) -> Option<User> {
        match self.read::<User>(CURRENT_USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("⚠️ [STORE] Usuario actual ilegible, se ignora: {}", e);
                None
            }
        }
    }

    fn login(&self, username: &str, password: &str) -> Result<User, StoreError> {
        let user = self
            .users()
            .into_iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(StoreError::InvalidCredentials)?;
        self.write(CURRENT_USER_KEY, &user)?;
        log::info!("🔐 [STORE] Sesión abierta para {}", user.username);
        Ok(user)
    }

    fn logout(&self) {
        self.backend.remove(&self.key(CURRENT_USER_KEY));
        log::info!("👋 [STORE] Sesión cerrada");
    }

    fn town_stats(&self) -> TownStats {
        match self.read::<TownStats>(TOWN_STATS_KEY) {
            Ok(Some(stats)) => stats,
            Ok(None) => TownStats::default(),
            Err(e) => {
                log::warn!("⚠️ [STORE] Estadísticas ilegibles, usando valores por defecto: {}", e);
                TownStats::default()
            }
        }
    }
}

/// Abre el store del navegador; cae a memoria si localStorage no está disponible
pub fn open_browser_store() -> Rc<dyn SessionStore> {
    match BrowserStorage::new() {
        Some(storage) => {
            let store = LocalSessionStore::new(storage, CONFIG.storage_prefix.clone());
            if let Err(e) = store.seed_defaults() {
                log::error!("❌ [STORE] Error sembrando datos iniciales: {}", e);
            }
            Rc::new(store)
        }
        None => {
            log::warn!("⚠️ [STORE] localStorage no disponible, usando almacenamiento en memoria");
            let store = LocalSessionStore::new(MemoryStorage::new(), CONFIG.storage_prefix.clone());
            if let Err(e) = store.seed_defaults() {
                log::error!("❌ [STORE] Error sembrando datos iniciales: {}", e);
            }
            Rc::new(store)
        }
    }
}

fn default_admin() -> User {
    User {
        id: uuid::Uuid::new_v4().to_string(),
        username: "admin".to_string(),
        password: "admin123".to_string(),
        name: "Portal Admin".to_string(),
        email: "admin@manadhone.in".to_string(),
        role: Role::Admin,
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> LocalSessionStore<MemoryStorage> {
        let store = LocalSessionStore::new(MemoryStorage::new(), "test");
        store.seed_defaults().unwrap();
        store
    }

    #[test]
    fn seeds_admin_account_and_stats_once() {
        let store = store();
        assert_eq!(store.users().len(), 1);
        assert!(store.users()[0].is_admin());

        store.seed_defaults().unwrap();
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.town_stats().residents, TownStats::default().residents);
    }

    #[test]
    fn login_then_logout_updates_current_user() {
        let store = store();
        assert!(store.current_user().is_none());

        let user = store.login("admin", "admin123").unwrap();
        assert_eq!(store.current_user(), Some(user));

        store.logout();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn login_rejects_wrong_password() {
        let store = store();
        let err = store.login("admin", "nope").unwrap_err();
        assert!(matches!(err, StoreError::InvalidCredentials));
        assert!(store.current_user().is_none());
    }

    #[test]
    fn corrupted_records_are_masked() {
        let store = store();
        store
            .backend
            .save("test_current_user", json!({"unexpected": true}))
            .unwrap();
        store
            .backend
            .save("test_town_stats", json!("not a record"))
            .unwrap();

        assert!(store.current_user().is_none());
        assert_eq!(store.town_stats(), TownStats::default());
    }

    #[test]
    fn stored_users_can_sign_in() {
        let store = store();
        let mut users = store.users();
        users.push(User {
            id: "u2".to_string(),
            username: "lakshmi".to_string(),
            password: "pw".to_string(),
            name: "Lakshmi Devi".to_string(),
            email: "lakshmi@example.com".to_string(),
            role: Role::User,
        });
        store.write(USERS_KEY, &users).unwrap();

        let user = store.login("lakshmi", "pw").unwrap();
        assert!(!user.is_admin());
        assert_eq!(store.users().len(), 2);
    }

    #[test]
    fn stored_stats_are_returned_verbatim() {
        let store = store();
        let stats = TownStats {
            residents: "1,210".to_string(),
            active_listings: "39".to_string(),
            last_updated: 1_700_000_000_000,
            ..TownStats::default()
        };
        store.write(TOWN_STATS_KEY, &stats).unwrap();

        assert_eq!(store.town_stats(), stats);
    }
}
