// ============================================================================
// STORAGE - Backends clave/valor (localStorage con fallback en memoria)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage as _};
use serde_json::Value;
use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,
    #[error("error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("error de localStorage: {0}")]
    Js(String),
}

/// Almacén clave/valor de documentos JSON
pub trait StorageBackend {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn save(&self, key: &str, value: Value) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Backend sobre `window.localStorage`
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    _private: (),
}

impl BrowserStorage {
    /// Retorna None si localStorage no está accesible (modo privado, iframe sandbox...)
    pub fn new() -> Option<Self> {
        get_local_storage().map(|_| Self { _private: () })
    }
}

impl StorageBackend for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        match LocalStorage::get::<Value>(key) {
            Ok(value) => Ok(Some(value)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(GlooStorageError::SerdeError(e)) => Err(StorageError::Serialization(e)),
            Err(GlooStorageError::JsError(e)) => Err(StorageError::Js(e.to_string())),
        }
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StorageError> {
        LocalStorage::set(key, value).map_err(|e| match e {
            GlooStorageError::SerdeError(e) => StorageError::Serialization(e),
            other => StorageError::Js(other.to_string()),
        })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Backend en memoria: fallback sin localStorage y backend de los tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryStorage {
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn memory_storage_roundtrips_and_removes() {
        let storage = MemoryStorage::new();
        assert!(storage.load("k").unwrap().is_none());

        storage.save("k", json!({"a": 1})).unwrap();
        assert_eq!(storage.load("k").unwrap(), Some(json!({"a": 1})));
        assert_eq!(storage.len(), 1);

        storage.remove("k");
        assert!(storage.is_empty());
    }
}
