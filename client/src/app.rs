//! Root application component with routing and the store context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{login::LoginPage, profile::ProfilePage};
use crate::state::store::AppState;
use crate::util::session_storage::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the store signal to every route. The persisted session is
/// restored in an effect so server and hydrated markup start identical.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app = RwSignal::new(AppState::default());
    provide_context(app);

    Effect::new(move || {
        let session = SessionStore::browser().get_state();
        log::debug!("restored session: authenticated={}", session.is_authenticated);
        app.set(AppState::restored(session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/profile-desk.css"/>
        <Title text="Profile Desk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/profile"/> }/>
            </Routes>
        </Router>
    }
}
