//! # Session flag, the client-side "logged in" marker
//!
//! The app has no server session. Signing in writes the username under a single
//! well-known key ([`SESSION_KEY`]) in persistent key/value storage, and screens
//! read that key on entry to decide whether to redirect. Anyone able to edit
//! local storage can forge it: it gates navigation, nothing more.
//!
//! Nothing in the app clears the flag. Once set it stays until the storage
//! itself is wiped.
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string map with `get`/`set`/`remove`, matching the shape of
//! `window.localStorage`. Implementations live in sibling modules:
//!
//! | Store | Backing | Used by |
//! |-------|---------|---------|
//! | [`crate::MemoryStore`] | shared `HashMap` | tests, wasm builds without the `web` feature |
//! | [`crate::FileStore`] | TOML file under the platform data dir | native builds |
//! | `LocalStore` | `window.localStorage` | the web app (`web` feature) |
//!
//! ## Gate
//!
//! [`Session::redirect_for`] is the whole access policy: the notes screen bounces
//! signed-out visitors to login, and the login screen bounces signed-in visitors
//! to notes. Register and practice are never redirected.

/// Storage key holding the signed-in username.
pub const SESSION_KEY: &str = "userLoggedIn";

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The screens the session gate knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Notes,
    Register,
    Practice,
}

/// The session flag, read and written through a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored username, if the flag is present and non-empty.
    pub fn current_user(&self) -> Option<String> {
        self.store.get(SESSION_KEY).filter(|value| !value.is_empty())
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Set the flag to `username`.
    pub fn sign_in(&self, username: &str) {
        self.store.set(SESSION_KEY, username);
    }

    /// Where a visitor entering `screen` should be sent instead, if anywhere.
    pub fn redirect_for(&self, screen: Screen) -> Option<Screen> {
        match (screen, self.is_signed_in()) {
            (Screen::Notes, false) => Some(Screen::Login),
            (Screen::Login, true) => Some(Screen::Notes),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_flag_absent_by_default() {
        let session = Session::new(MemoryStore::new());
        assert!(session.current_user().is_none());
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_sign_in_stores_username_under_key() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        session.sign_in("a@x.com");

        assert_eq!(session.current_user().as_deref(), Some("a@x.com"));
        assert_eq!(store.get(SESSION_KEY).as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_empty_flag_counts_as_signed_out() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "");
        let session = Session::new(store);

        assert!(!session.is_signed_in());
        assert_eq!(session.redirect_for(Screen::Notes), Some(Screen::Login));
    }

    #[test]
    fn test_flag_outlives_the_session_that_set_it() {
        let store = MemoryStore::new();
        Session::new(store.clone()).sign_in("a@x.com");

        let reopened = Session::new(store);

        assert_eq!(reopened.current_user().as_deref(), Some("a@x.com"));
        assert_eq!(reopened.redirect_for(Screen::Login), Some(Screen::Notes));
    }

    #[test]
    fn test_gate_when_signed_out() {
        let session = Session::new(MemoryStore::new());

        assert_eq!(session.redirect_for(Screen::Notes), Some(Screen::Login));
        assert_eq!(session.redirect_for(Screen::Login), None);
        assert_eq!(session.redirect_for(Screen::Register), None);
        assert_eq!(session.redirect_for(Screen::Practice), None);
    }

    #[test]
    fn test_gate_when_signed_in() {
        let session = Session::new(MemoryStore::new());
        session.sign_in("a@x.com");

        assert_eq!(session.redirect_for(Screen::Login), Some(Screen::Notes));
        assert_eq!(session.redirect_for(Screen::Notes), None);
        assert_eq!(session.redirect_for(Screen::Register), None);
        assert_eq!(session.redirect_for(Screen::Practice), None);
    }
}
