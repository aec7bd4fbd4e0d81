use serde_json::json;

use super::*;

const EMAIL_REQUIRED: RuleTable = &[(ProfileField::Email, &[Rule::Required, Rule::Email])];
const NO_RULES: RuleTable = &[];

fn user(value: Value) -> UserRecord {
    UserRecord::from_value(value).unwrap()
}

fn full_user() -> UserRecord {
    user(json!({
        "id": "u1",
        "givenName": "Ada",
        "familyName": "Lovelace",
        "nickname": "ada",
        "email": "ada@example.com",
        "emailVerified": true,
        "gender": "female",
        "locale": "en-GB",
        "notes": "",
        "picture": "https://example.com/ada.png",
    }))
}

fn input(field: ProfileField, text: &str) -> FormEvent {
    FormEvent::Input(field, text.to_owned())
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn from_user_binds_record_values() {
    let form = ProfileForm::from_user(&full_user());
    assert_eq!(form.text(ProfileField::GivenName), "Ada");
    assert_eq!(form.text(ProfileField::Locale), "en-GB");
    assert!(form.flag(ProfileField::EmailVerified));
    assert!(form.gender_checked(Gender::Female));
    assert!(!form.gender_checked(Gender::Male));
}

#[test]
fn from_user_starts_pristine_with_controls_disabled() {
    let form = ProfileForm::from_user(&full_user());
    assert!(form.is_pristine());
    assert!(!form.is_invalid());
    assert!(form.is_update_disabled());
    assert!(form.is_reset_disabled());
}

#[test]
fn from_user_skips_missing_and_mistyped_keys() {
    let form = ProfileForm::from_user(&user(json!({ "givenName": 5, "emailVerified": "yes" })));
    assert!(form.value(ProfileField::GivenName).is_none());
    assert!(form.value(ProfileField::EmailVerified).is_none());
    assert!(form.values().is_empty());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn editing_makes_form_dirty_and_enables_controls() {
    let form = ProfileForm::from_user(&full_user()).apply(input(ProfileField::Nickname, "countess"));
    assert!(!form.is_pristine());
    assert!(!form.is_update_disabled());
    assert!(!form.is_reset_disabled());
}

#[test]
fn editing_back_to_initial_value_is_pristine_again() {
    let form = ProfileForm::from_user(&full_user())
        .apply(input(ProfileField::Nickname, "countess"))
        .apply(input(ProfileField::Nickname, "ada"));
    assert!(form.is_pristine());
}

#[test]
fn clearing_field_absent_from_record_is_pristine_again() {
    let record = user(json!({ "id": 1 }));
    let form = ProfileForm::with_rules(&record, NO_RULES)
        .apply(input(ProfileField::Nickname, "a"))
        .apply(input(ProfileField::Nickname, ""));
    assert!(form.is_pristine());
    assert!(form.value(ProfileField::Nickname).is_none());

    let edited = form.apply(input(ProfileField::GivenName, "X"));
    let merged = edited.submit(&record).unwrap();
    assert_eq!(merged.into_value(), json!({ "id": 1, "givenName": "X" }));
}

#[test]
fn reset_restores_initial_values() {
    let form = ProfileForm::from_user(&full_user())
        .apply(input(ProfileField::GivenName, ""))
        .apply(FormEvent::Check(ProfileField::EmailVerified, false))
        .apply(FormEvent::Reset);
    assert!(form.is_pristine());
    assert_eq!(form.text(ProfileField::GivenName), "Ada");
    assert!(form.flag(ProfileField::EmailVerified));
    assert_eq!(form.visible_error(ProfileField::GivenName), None);
}

#[test]
fn gender_selection_keeps_exactly_one_checked() {
    let form = ProfileForm::from_user(&user(json!({})));
    assert!(!form.gender_checked(Gender::Male));
    assert!(!form.gender_checked(Gender::Female));

    let form = form.apply(FormEvent::SelectGender(Gender::Female));
    assert!(form.gender_checked(Gender::Female));
    assert!(!form.gender_checked(Gender::Male));

    let form = form.apply(FormEvent::SelectGender(Gender::Male));
    assert!(form.gender_checked(Gender::Male));
    assert!(!form.gender_checked(Gender::Female));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn email_required_blocks_update_until_well_formed() {
    let original = user(json!({ "givenName": "A", "email": "" }));
    let form = ProfileForm::with_rules(&original, EMAIL_REQUIRED);
    assert!(form.is_invalid());
    assert!(form.is_update_disabled());

    let form = form.apply(input(ProfileField::GivenName, "B"));
    assert!(form.is_update_disabled());

    let form = form.apply(input(ProfileField::Email, "b@"));
    assert!(form.is_update_disabled());
    assert_eq!(form.errors(ProfileField::Email), vec![Rule::Email]);

    let form = form.apply(input(ProfileField::Email, "b@example.com"));
    assert!(!form.is_invalid());
    assert!(!form.is_update_disabled());
}

#[test]
fn visible_error_waits_for_interaction() {
    let form = ProfileForm::from_user(&user(json!({ "email": "" })));
    assert_eq!(form.errors(ProfileField::Email), vec![Rule::Required]);
    assert_eq!(form.visible_error(ProfileField::Email), None);

    let form = form.apply(FormEvent::Blur(ProfileField::Email));
    assert_eq!(form.visible_error(ProfileField::Email), Some(Rule::Required));
}

#[test]
fn visible_error_shows_first_failing_rule_only() {
    let form = ProfileForm::from_user(&full_user()).apply(input(ProfileField::Email, "   "));
    assert_eq!(form.visible_error(ProfileField::Email), Some(Rule::Required));
}

#[test]
fn clearing_required_name_invalidates_form() {
    let form = ProfileForm::from_user(&full_user()).apply(input(ProfileField::FamilyName, ""));
    assert!(form.is_invalid());
    assert!(form.is_update_disabled());
    assert!(!form.is_reset_disabled());
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_merges_field_values_over_original_record() {
    let original = user(json!({ "givenName": "A", "id": 1 }));
    let form = ProfileForm::with_rules(&original, NO_RULES).apply(input(ProfileField::GivenName, "X"));
    let merged = form.submit(&original).unwrap();
    assert_eq!(merged.into_value(), json!({ "id": 1, "givenName": "X" }));
}

#[test]
fn submit_is_blocked_while_pristine() {
    let original = full_user();
    let form = ProfileForm::from_user(&original);
    assert_eq!(form.submit(&original), None);
}

#[test]
fn submit_is_blocked_while_invalid() {
    let original = full_user();
    let form = ProfileForm::from_user(&original).apply(input(ProfileField::Email, "not-an-email"));
    assert_eq!(form.submit(&original), None);
}

#[test]
fn submit_keeps_unrelated_keys_and_writes_flags() {
    let original = full_user();
    let form = ProfileForm::from_user(&original)
        .apply(FormEvent::Check(ProfileField::EmailVerified, false))
        .apply(input(ProfileField::Notes, "first programmer"));
    let merged = form.submit(&original).unwrap();
    assert_eq!(merged.get_str("id"), Some("u1"));
    assert_eq!(merged.get_str("picture"), Some("https://example.com/ada.png"));
    assert_eq!(merged.get_bool("emailVerified"), Some(false));
    assert_eq!(merged.get_str("notes"), Some("first programmer"));
}
