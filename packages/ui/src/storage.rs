//! Shared session-store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Everything else**: a process-wide [`store::MemoryStorage`], so a session
//!   survives navigation but not a restart

/// Create the platform-appropriate session store.
pub fn make_session_store() -> store::SessionStore<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionStore::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static FALLBACK: std::sync::OnceLock<store::MemoryStorage> = std::sync::OnceLock::new();
        store::SessionStore::new(FALLBACK.get_or_init(store::MemoryStorage::new).clone())
    }
}
