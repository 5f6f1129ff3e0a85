//! # Browser local storage: web platform persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It reads and writes `window.localStorage` through `web-sys`.
//!
//! ## Error handling
//!
//! All trait methods swallow errors (returning `None` for reads, doing nothing
//! for writes) after logging them. Private browsing modes and exhausted quotas
//! therefore degrade to "no stored session" instead of breaking sign-in.

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
///
/// Zero-size and `Copy`: the storage handle is looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("Failed to write {} to localStorage: {:?}", key, e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove {} from localStorage: {:?}", key, e);
            }
        }
    }
}
