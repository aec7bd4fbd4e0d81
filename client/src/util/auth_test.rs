use super::*;

#[test]
fn should_redirect_unauth_for_default_session() {
    assert!(should_redirect_unauth(&SessionState::default()));
}

#[test]
fn should_redirect_unauth_when_settled_and_anonymous() {
    let session = SessionState { is_loading: false, ..SessionState::default() };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_when_authenticated() {
    assert!(!should_redirect_unauth(&SessionState::authenticated("tok")));
}
