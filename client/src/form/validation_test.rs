use super::*;

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_owned())
}

// =============================================================
// Rule::check
// =============================================================

#[test]
fn required_rejects_missing_and_blank() {
    assert!(!Rule::Required.check(None));
    assert!(!Rule::Required.check(Some(&text(""))));
    assert!(!Rule::Required.check(Some(&text("   "))));
    assert!(Rule::Required.check(Some(&text("Ada"))));
}

#[test]
fn required_accepts_any_flag() {
    assert!(Rule::Required.check(Some(&FieldValue::Flag(false))));
}

#[test]
fn email_leaves_empty_to_required() {
    assert!(Rule::Email.check(None));
    assert!(Rule::Email.check(Some(&text(""))));
}

#[test]
fn email_checks_format() {
    assert!(Rule::Email.check(Some(&text("ada@example.com"))));
    assert!(Rule::Email.check(Some(&text("Ada.Lovelace+x@Mail.Example.ORG"))));
    assert!(!Rule::Email.check(Some(&text("ada"))));
    assert!(!Rule::Email.check(Some(&text("ada@"))));
    assert!(!Rule::Email.check(Some(&text("ada@example"))));
    assert!(!Rule::Email.check(Some(&text("a da@example.com"))));
}

// =============================================================
// Rule table
// =============================================================

#[test]
fn profile_rules_cover_names_and_email() {
    assert_eq!(rules_for(PROFILE_RULES, ProfileField::GivenName), &[Rule::Required]);
    assert_eq!(rules_for(PROFILE_RULES, ProfileField::FamilyName), &[Rule::Required]);
    assert_eq!(rules_for(PROFILE_RULES, ProfileField::Email), &[Rule::Required, Rule::Email]);
    assert!(rules_for(PROFILE_RULES, ProfileField::Notes).is_empty());
}

#[test]
fn failing_rules_reports_in_declared_order() {
    assert_eq!(failing_rules(PROFILE_RULES, ProfileField::Email, None), vec![Rule::Required]);
    assert_eq!(
        failing_rules(PROFILE_RULES, ProfileField::Email, Some(&text("nope"))),
        vec![Rule::Email]
    );
    assert!(failing_rules(PROFILE_RULES, ProfileField::Email, Some(&text("a@b.co"))).is_empty());
}

#[test]
fn failing_rules_empty_for_unruled_field() {
    assert!(failing_rules(PROFILE_RULES, ProfileField::Nickname, None).is_empty());
}
