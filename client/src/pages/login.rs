//! Login page driving the auth login flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::store::AppState;

/// Status line shown under the sign-in button.
fn login_status(session: &SessionState, busy: bool, attempted: bool) -> &'static str {
    if busy {
        "Signing in..."
    } else if session.is_authenticated {
        "Signed in."
    } else if attempted {
        "Sign-in failed. Try again."
    } else {
        ""
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let busy = RwSignal::new(false);
    let attempted = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        if app.with(|state| state.session.is_authenticated) && !busy.get() {
            navigate("/profile", NavigateOptions::default());
        }
    });

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let store = crate::util::session_storage::SessionStore::browser();
            crate::state::auth::login_request(&app, &store, &crate::net::api::HttpProfileService).await;
            attempted.set(true);
            busy.set(false);
        });
    };

    let status = move || app.with(|state| login_status(&state.session, busy.get(), attempted.get()));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Profile Desk"</h1>
                <form class="login-form" on:submit=on_login>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <p class="login-message">{status}</p>
            </div>
        </div>
    }
}
