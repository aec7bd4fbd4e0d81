//! Authentication status for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session slice is what gets written to `localStorage` and restored on
//! the next page load. Its JSON shape is camelCase so it stays readable from
//! devtools alongside any other persisted keys.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Session State held for the current client.
///
/// `is_loading` implies `!is_authenticated`; the constructors below are the
/// only places that produce new combinations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub token: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { is_loading: true, is_authenticated: false, is_admin: false, token: None }
    }
}

impl SessionState {
    /// State produced by a successful login.
    #[must_use]
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self { is_loading: false, is_authenticated: true, is_admin: true, token: Some(token.into()) }
    }

    /// Whether the loading/authenticated invariant holds.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        !(self.is_loading && self.is_authenticated)
    }
}
