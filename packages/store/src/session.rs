//! # Session persistence: token and user in key/value storage
//!
//! [`SessionStore`] mirrors the signed-in [`Session`] into a [`KeyValueStore`]
//! under two fixed keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | the opaque bearer credential, verbatim |
//! | [`USER_KEY`] (`"user"`) | the [`User`] record as JSON |
//!
//! Both entries are written together by [`SessionStore::save`] and removed
//! together by [`SessionStore::clear`]. There is no expiry, refresh, or
//! validation of the stored credential; the server is the only judge of it.
//!
//! [`SessionStore::load`] is meant to run once at start-up. It yields a session
//! only when both entries exist and the user record parses; anything else is
//! treated as "signed out".

use serde::{Deserialize, Serialize};

use crate::models::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Synchronous string key/value storage (browser `localStorage` semantics).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The authenticated user plus their bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Reads and writes the session entries of a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the persisted session, if a complete one exists.
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY)?;
        let raw_user = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                tracing::warn!("Ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    /// Persist both entries, overwriting whatever was there.
    pub fn save(&self, session: &Session) -> Result<(), serde_json::Error> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.token);
        self.storage.set(USER_KEY, &user);
        Ok(())
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
