//! `localStorage` as session storage
//!
//! Uses `web_sys::Storage` directly instead of `gloo-storage`.

use gymdash::{DashError, DashResult, SessionStorage};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn require() -> DashResult<web_sys::Storage> {
        Self::storage().ok_or_else(|| DashError::Storage("localStorage unavailable".to_string()))
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> DashResult<()> {
        Self::require()?
            .set_item(key, value)
            .map_err(|e| DashError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> DashResult<()> {
        Self::require()?
            .remove_item(key)
            .map_err(|e| DashError::Storage(format!("{:?}", e)))
    }
}
