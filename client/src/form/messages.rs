//! User-facing copy for the profile form.

use super::fields::{Gender, ProfileField};
use super::validation::Rule;

/// Placeholder shown in an empty text input.
#[must_use]
pub fn placeholder(field: ProfileField) -> &'static str {
    match field {
        ProfileField::GivenName => "Given name",
        ProfileField::FamilyName => "Family name",
        ProfileField::Nickname => "Nickname",
        ProfileField::Email => "Email",
        ProfileField::EmailVerified | ProfileField::Gender | ProfileField::Locale | ProfileField::Notes => "",
    }
}

/// Label for non-text controls.
#[must_use]
pub fn label(field: ProfileField) -> &'static str {
    match field {
        ProfileField::EmailVerified => "Email verified",
        ProfileField::Gender => "Gender",
        ProfileField::Locale => "Locale",
        ProfileField::Notes => "Notes",
        other => placeholder(other),
    }
}

#[must_use]
pub fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
    }
}

/// Inline message for a failed rule.
#[must_use]
pub fn rule_error(rule: Rule) -> &'static str {
    match rule {
        Rule::Required => "This field is required.",
        Rule::Email => "Please enter a valid email address.",
    }
}

pub const SAVE_LABEL: &str = "Save";
pub const RESET_LABEL: &str = "Reset";
