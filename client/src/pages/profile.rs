//! Profile page: the edit form plus sign-out, behind the auth redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads through `localStorage` but the user record
//! does not, so an authenticated visit without a user re-fetches it before
//! rendering the form.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::profile_edit_form::ProfileEditForm;
use crate::state::auth::logout_request;
use crate::state::store::AppState;
use crate::state::user::UserRecord;
use crate::util::auth::install_unauth_redirect;
use crate::util::session_storage::SessionStore;

/// Whether the page has to fetch the user before it can render the form.
fn needs_user_refresh(state: &AppState) -> bool {
    state.session.is_authenticated && state.user.is_none()
}

/// The user slice alone, so session changes don't rebuild the form.
fn user_slice(app: RwSignal<AppState>) -> Memo<Option<UserRecord>> {
    Memo::new(move |_| app.with(|state| state.user.clone()))
}

/// Status line after an update attempt.
#[cfg(any(test, feature = "hydrate"))]
fn save_message(result: &Result<UserRecord, crate::net::types::ApiError>) -> String {
    match result {
        Ok(_) => "Profile saved.".to_owned(),
        Err(e) => format!("Save failed: {e}"),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let status = RwSignal::new(String::new());
    let navigate = use_navigate();

    install_unauth_redirect(app, navigate.clone());

    #[cfg(feature = "hydrate")]
    {
        let refreshing = RwSignal::new(false);
        Effect::new(move || {
            if !app.with(needs_user_refresh) || refreshing.get_untracked() {
                return;
            }
            refreshing.set(true);
            leptos::task::spawn_local(async move {
                use crate::state::store::Dispatch;
                match crate::net::api::fetch_profile().await {
                    Ok(user) => app.dispatch(crate::state::user::UserEvent::Set(user).into()),
                    Err(e) => {
                        log::warn!("profile refresh failed: {e}");
                        app.dispatch(crate::state::auth::login_failure(&SessionStore::browser()).into());
                        app.dispatch(crate::state::user::UserEvent::Clear.into());
                    }
                }
                refreshing.set(false);
            });
        });
    }

    let on_update = Callback::new(move |user: UserRecord| {
        status.set("Saving...".to_owned());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::store::Dispatch;
            let result = crate::net::api::update_profile(&user).await;
            status.set(save_message(&result));
            match result {
                Ok(saved) => app.dispatch(crate::state::user::UserEvent::Set(saved).into()),
                Err(e) => log::error!("profile update failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = user;
    });

    let on_logout = move |_| {
        logout_request(&app, &SessionStore::browser());
        navigate("/login", NavigateOptions::default());
    };

    let user = user_slice(app);
    let form = move || user.get().map(|user| view! { <ProfileEditForm user=user on_update=on_update/> });

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                <h1>"Edit profile"</h1>
                <button class="btn" on:click=on_logout>"Sign out"</button>
            </header>
            <Show
                when=move || !app.with(needs_user_refresh)
                fallback=|| view! { <p class="profile-page__loading">"Loading profile..."</p> }
            >
                {form}
            </Show>
            <p class="profile-page__status">{move || status.get()}</p>
        </div>
    }
}
