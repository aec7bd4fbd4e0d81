//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::state::store::AppState;

/// True when the session does not grant access to signed-in routes.
///
/// Failure and logout both reset to the default (loading) session, so the
/// loading flag cannot tell "in flight" from "signed out" here.
#[must_use]
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    !session.is_authenticated
}

/// Redirect to `/login` whenever the session is not authenticated.
pub fn install_unauth_redirect<F>(app: RwSignal<AppState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let redirect = app.with(|state| should_redirect_unauth(&state.session));
        if redirect {
            navigate("/login", NavigateOptions::default());
        }
    });
}
