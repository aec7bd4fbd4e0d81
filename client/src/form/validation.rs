//! Declarative validation rules for the profile form.
//!
//! Rules live apart from the component: the table below says which checks
//! apply to which field, and the form view-model evaluates it on every change.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use super::fields::{FieldValue, ProfileField};

/// A single field check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-blank.
    Required,
    /// Value, when present, must look like an email address.
    Email,
}

/// Rules applied to each profile field, in reporting order.
pub const PROFILE_RULES: &[(ProfileField, &[Rule])] = &[
    (ProfileField::GivenName, &[Rule::Required]),
    (ProfileField::FamilyName, &[Rule::Required]),
    (ProfileField::Email, &[Rule::Required, Rule::Email]),
];

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").ok());

/// Whether `value` looks like an email address.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

impl Rule {
    /// Whether `value` passes this rule.
    #[must_use]
    pub fn check(self, value: Option<&FieldValue>) -> bool {
        let text = value.map_or("", FieldValue::as_text).trim();
        match self {
            Self::Required => match value {
                Some(FieldValue::Flag(_)) => true,
                _ => !text.is_empty(),
            },
            Self::Email => text.is_empty() || is_email(text),
        }
    }
}

/// Rules declared for `field` in `rules`.
#[must_use]
pub fn rules_for(rules: &[(ProfileField, &'static [Rule])], field: ProfileField) -> &'static [Rule] {
    rules.iter().find(|(f, _)| *f == field).map_or(&[] as &[Rule], |(_, r)| *r)
}

/// Failing rules for `field` given its current value.
#[must_use]
pub fn failing_rules(
    rules: &[(ProfileField, &'static [Rule])],
    field: ProfileField,
    value: Option<&FieldValue>,
) -> Vec<Rule> {
    rules_for(rules, field).iter().copied().filter(|rule| !rule.check(value)).collect()
}
