//! # Browser localStorage session store
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the **web platform**.
//! The two session fields are written as separate plain-string `localStorage`
//! entries through [`gloo_storage`]'s raw handle, so they survive page reloads,
//! are shared between tabs of the same origin, and read the same values other
//! clients of the origin write (no JSON quoting).
//!
//! Storage errors (quota, disabled storage, private browsing) never reach the
//! caller: reads degrade to "no session" and failed writes are logged.

use gloo_storage::{LocalStorage, Storage};

use crate::session::{Session, SessionStore, USER_ID_KEY, USER_NAME_KEY};

/// `localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Option<Session> {
        let user_name = get_item(USER_NAME_KEY)?;
        let user_id = get_item(USER_ID_KEY)?;
        Some(Session { user_id, user_name })
    }

    fn save(&self, session: &Session) {
        set_item(USER_NAME_KEY, &session.user_name);
        set_item(USER_ID_KEY, &session.user_id);
    }

    fn clear(&self) {
        LocalStorage::delete(USER_NAME_KEY);
        LocalStorage::delete(USER_ID_KEY);
    }
}

fn get_item(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

fn set_item(key: &str, value: &str) {
    if let Err(e) = LocalStorage::raw().set_item(key, value) {
        tracing::warn!("Failed to store {}: {:?}", key, e);
    }
}
