//! Auth actions: login request/success/failure and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `login_request` and `logout_request`; both write the session
//! through the [`SessionStore`] and emit events into the app store. The
//! write and the emission are separate steps, so a reader of storage can
//! observe the new session slightly before the store does.
//!
//! Login has one suspension point, the profile fetch. It is not retried,
//! has no timeout, and nothing prevents a second login request from starting
//! while the first is in flight.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::SessionState;
use super::store::{AppEvent, Dispatch};
use super::user::UserEvent;
use crate::net::types::ProfileService;
use crate::util::session_storage::{KeyValueStorage, SessionStore};

/// Token attached to sessions created by a successful login.
pub const SESSION_TOKEN: &str = "eyJ0eXAasdfiOi";

/// Auth state transitions. Each outcome carries the session it installs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    LoginRequest,
    LoginSuccess(SessionState),
    LoginFailure(SessionState),
    LogoutRequest(SessionState),
}

/// Apply an [`AuthEvent`] to the session slice.
#[must_use]
pub fn reduce_session(current: SessionState, event: &AuthEvent) -> SessionState {
    match event {
        AuthEvent::LoginRequest => SessionState { is_loading: true, is_authenticated: false, ..current },
        AuthEvent::LoginSuccess(next) | AuthEvent::LoginFailure(next) | AuthEvent::LogoutRequest(next) => {
            next.clone()
        }
    }
}

/// Persist an authenticated session and build the success event.
pub fn login_success<S: KeyValueStorage>(store: &SessionStore<S>, token: &str) -> AuthEvent {
    let state = SessionState::authenticated(token);
    store.persist(&state);
    AuthEvent::LoginSuccess(state)
}

/// Persist the default session and build the failure event.
pub fn login_failure<S: KeyValueStorage>(store: &SessionStore<S>) -> AuthEvent {
    store.clear();
    AuthEvent::LoginFailure(SessionState::default())
}

/// Run the login flow: request, fetch the profile, then success or failure.
pub async fn login_request<D, S, P>(dispatch: &D, store: &SessionStore<S>, service: &P)
where
    D: Dispatch,
    S: KeyValueStorage,
    P: ProfileService,
{
    dispatch.dispatch(AppEvent::Auth(AuthEvent::LoginRequest));

    match service.fetch_profile().await {
        Ok(user) => {
            log::info!("login succeeded");
            dispatch.dispatch(login_success(store, SESSION_TOKEN).into());
            dispatch.dispatch(UserEvent::Set(user).into());
        }
        Err(e) => {
            log::warn!("login failed: {e}");
            dispatch.dispatch(login_failure(store).into());
            dispatch.dispatch(UserEvent::Clear.into());
        }
    }
}

/// Clear the persisted session and emit the logout events.
pub fn logout_request<D, S>(dispatch: &D, store: &SessionStore<S>)
where
    D: Dispatch,
    S: KeyValueStorage,
{
    store.clear();
    dispatch.dispatch(UserEvent::Clear.into());
    dispatch.dispatch(AuthEvent::LogoutRequest(SessionState::default()).into());
}
