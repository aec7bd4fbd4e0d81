use super::*;

#[test]
fn login_status_busy_wins() {
    assert_eq!(login_status(&SessionState::authenticated("tok"), true, true), "Signing in...");
}

#[test]
fn login_status_blank_before_first_attempt() {
    assert_eq!(login_status(&SessionState::default(), false, false), "");
}

#[test]
fn login_status_reports_success() {
    assert_eq!(login_status(&SessionState::authenticated("tok"), false, true), "Signed in.");
}

#[test]
fn login_status_reports_failure_after_attempt() {
    assert_eq!(login_status(&SessionState::default(), false, true), "Sign-in failed. Try again.");
}
