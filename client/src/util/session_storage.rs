//! Persisted session storage backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth actions write the session through here before (or alongside)
//! emitting their events, and the app shell restores it on hydrate. Reads and
//! writes are synchronous and unversioned: one key, one JSON document.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort. Missing storage, quota errors, and SSR all
//! degrade to "nothing stored" rather than surfacing an error to the caller.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::state::session::SessionState;

/// Key under which the session JSON is stored.
pub const STORAGE_KEY: &str = "profile_desk:auth";

/// Synchronous string key-value storage.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

/// `window.localStorage`; a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = browser_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-process storage. Clones share the same backing map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Session State Store: reads and writes [`SessionState`] under [`STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S = LocalStorage> {
    storage: S,
}

impl SessionStore<LocalStorage> {
    /// Store backed by the browser's `localStorage`.
    #[must_use]
    pub const fn browser() -> Self {
        Self { storage: LocalStorage }
    }
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stored session, or the default when nothing (or garbage) is stored.
    ///
    /// A stored session that is both loading and authenticated is garbage too.
    pub fn get_state(&self) -> SessionState {
        let Some(raw) = self.storage.get_item(STORAGE_KEY) else {
            return SessionState::default();
        };
        match serde_json::from_str::<SessionState>(&raw) {
            Ok(state) if state.is_consistent() => state,
            Ok(_) => {
                log::warn!("discarding inconsistent session in {STORAGE_KEY}");
                SessionState::default()
            }
            Err(e) => {
                log::warn!("discarding malformed session in {STORAGE_KEY}: {e}");
                SessionState::default()
            }
        }
    }

    /// Serialize `state` and write it under [`STORAGE_KEY`].
    pub fn persist(&self, state: &SessionState) {
        match serde_json::to_string(state) {
            Ok(raw) => self.storage.set_item(STORAGE_KEY, &raw),
            Err(e) => log::warn!("session serialization failed: {e}"),
        }
    }

    /// Reset the stored session to the default state.
    pub fn clear(&self) {
        self.persist(&SessionState::default());
    }
}
