//! localStorage Bindings
//!
//! `BrowserStorage` is a zero-sized handle that looks the storage object up
//! on every call, so services built on it are `Copy + Send + Sync` and can be
//! captured by reactive closures.

use notebook_core::{
    Credentials, DomainError, DomainResult, KeyValueStore, SessionGate, SystemClock, TaskService,
    ThemePreference,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let storage = Self::storage()
            .ok_or_else(|| DomainError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub type BrowserTaskService = TaskService<BrowserStorage, SystemClock>;

pub fn task_service() -> BrowserTaskService {
    TaskService::new(BrowserStorage, SystemClock)
}

pub fn session_gate(users: Vec<Credentials>) -> SessionGate<BrowserStorage> {
    SessionGate::new(BrowserStorage, users)
}

pub fn theme_preference() -> ThemePreference<BrowserStorage> {
    ThemePreference::new(BrowserStorage)
}
