//! # Session: the locally persisted identity of the signed-in administrator
//!
//! After a successful login the console keeps exactly two scalar values on the
//! client: the display name shown in the page header and the user identifier
//! used to recognise "my own row" in the user table. They are stored under two
//! independent keys ([`USER_NAME_KEY`], [`USER_ID_KEY`]) so a half-written
//! session (one key missing) simply reads back as no session at all.
//!
//! The [`SessionStore`] trait abstracts where the two values live. Backends
//! implement the three primitive operations; the identity helpers
//! ([`SessionStore::is_current_user`], [`SessionStore::rename_current_user`])
//! are provided on top of them.

use serde::{Deserialize, Serialize};

/// Storage key of the display name.
pub const USER_NAME_KEY: &str = "userName";

/// Storage key of the user identifier.
pub const USER_ID_KEY: &str = "userId";

/// Identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub user_name: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
        }
    }
}

/// Persistence for the current [`Session`].
pub trait SessionStore {
    /// Read the stored session. Returns `None` unless both fields are present.
    fn load(&self) -> Option<Session>;

    /// Persist both session fields, replacing any previous session.
    fn save(&self, session: &Session);

    /// Remove both session fields.
    fn clear(&self);

    /// Whether `user_id` identifies the signed-in user.
    fn is_current_user(&self, user_id: &str) -> bool {
        self.load().is_some_and(|s| s.user_id == user_id)
    }

    /// Update the stored display name if `user_id` is the signed-in user.
    ///
    /// Returns `true` when the session was rewritten.
    fn rename_current_user(&self, user_id: &str, user_name: &str) -> bool {
        match self.load() {
            Some(mut session) if session.user_id == user_id => {
                session.user_name = user_name.to_string();
                self.save(&session);
                true
            }
            _ => false,
        }
    }
}
