//! Root client state and its update function.
//!
//! DESIGN
//! ======
//! Every change goes through `reduce(state, event)`. Components read the
//! resulting `AppState` from an `RwSignal` provided as context; dispatching
//! through that signal is what notifies subscribed views.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use super::auth::{AuthEvent, reduce_session};
use super::session::SessionState;
use super::user::{UserEvent, UserRecord, reduce_user};

/// Root client state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub session: SessionState,
    pub user: Option<UserRecord>,
}

impl AppState {
    /// State at startup, seeded from the persisted session.
    #[must_use]
    pub fn restored(session: SessionState) -> Self {
        Self { session, user: None }
    }
}

/// Every event the store accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    Auth(AuthEvent),
    User(UserEvent),
}

impl From<AuthEvent> for AppEvent {
    fn from(event: AuthEvent) -> Self {
        Self::Auth(event)
    }
}

impl From<UserEvent> for AppEvent {
    fn from(event: UserEvent) -> Self {
        Self::User(event)
    }
}

/// Produce the next state for `event`.
#[must_use]
pub fn reduce(state: AppState, event: &AppEvent) -> AppState {
    match event {
        AppEvent::Auth(auth) => AppState { session: reduce_session(state.session, auth), ..state },
        AppEvent::User(user) => AppState { user: reduce_user(state.user, user), ..state },
    }
}

/// Sink for store events.
pub trait Dispatch {
    fn dispatch(&self, event: AppEvent);
}

impl Dispatch for RwSignal<AppState> {
    fn dispatch(&self, event: AppEvent) {
        log::debug!("dispatch {event:?}");
        self.update(|state| *state = reduce(std::mem::take(state), &event));
    }
}
