use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::session::{Session, SessionStore, USER_ID_KEY, USER_NAME_KEY};

/// In-memory SessionStore for testing and non-browser targets.
///
/// Clones share the same backing map, so a store handed to the API client and
/// one kept by the UI observe each other's writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `session`.
    pub fn with_session(session: &Session) -> Self {
        let store = Self::new();
        store.save(session);
        store
    }

    #[cfg(test)]
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    #[cfg(test)]
    fn set_item(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        let entries = self.entries();
        let user_name = entries.get(USER_NAME_KEY)?.clone();
        let user_id = entries.get(USER_ID_KEY)?.clone();
        Some(Session { user_id, user_name })
    }

    fn save(&self, session: &Session) {
        let mut entries = self.entries();
        entries.insert(USER_NAME_KEY.to_string(), session.user_name.clone());
        entries.insert(USER_ID_KEY.to_string(), session.user_id.clone());
    }

    fn clear(&self) {
        let mut entries = self.entries();
        entries.remove(USER_NAME_KEY);
        entries.remove(USER_ID_KEY);
    }
}
