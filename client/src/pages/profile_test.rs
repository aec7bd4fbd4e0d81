use leptos::prelude::*;
use serde_json::json;

use super::*;
use crate::net::types::ApiError;
use crate::state::auth::AuthEvent;
use crate::state::session::SessionState;
use crate::state::store::Dispatch;

fn user() -> UserRecord {
    UserRecord::from_value(json!({ "id": 1 })).unwrap()
}

#[test]
fn needs_user_refresh_when_authenticated_without_user() {
    let state = AppState::restored(SessionState::authenticated("tok"));
    assert!(needs_user_refresh(&state));
}

#[test]
fn no_refresh_when_user_present() {
    let state = AppState { session: SessionState::authenticated("tok"), user: Some(user()) };
    assert!(!needs_user_refresh(&state));
}

#[test]
fn no_refresh_when_signed_out() {
    assert!(!needs_user_refresh(&AppState::default()));
}

#[test]
fn save_message_reports_outcome() {
    assert_eq!(save_message(&Ok(user())), "Profile saved.");
    assert_eq!(save_message(&Err(ApiError::Status(422))), "Save failed: unexpected status: 422");
}

#[test]
fn user_slice_ignores_session_changes() {
    Owner::new().with(|| {
        let app = RwSignal::new(AppState { session: SessionState::authenticated("tok"), user: Some(user()) });
        let slice = user_slice(app);
        let changes = Memo::new(move |prev: Option<&usize>| {
            slice.track();
            prev.map_or(0, |n| n + 1)
        });
        assert_eq!(changes.get_untracked(), 0);

        app.dispatch(AuthEvent::LoginRequest.into());
        assert_eq!(slice.get_untracked(), Some(user()));
        assert_eq!(changes.get_untracked(), 0);

        app.dispatch(crate::state::user::UserEvent::Clear.into());
        assert_eq!(slice.get_untracked(), None);
        assert_eq!(changes.get_untracked(), 1);
    });
}
