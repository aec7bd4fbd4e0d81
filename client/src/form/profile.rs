//! Profile form view-model.
//!
//! DESIGN
//! ======
//! The form is a plain value updated by `apply(event)`. Each rendered input
//! reads its value from here and sends a `FormEvent` back, so there is no
//! hidden two-way binding. Pristine/invalid are derived on demand from the
//! initial and current value maps.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use super::fields::{FieldValue, Gender, ProfileField};
use super::validation::{PROFILE_RULES, Rule, failing_rules};
use crate::state::user::UserRecord;

type RuleTable = &'static [(ProfileField, &'static [Rule])];

/// Input events the form understands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// Text typed into a text, select, or textarea field.
    Input(ProfileField, String),
    /// Checkbox toggled.
    Check(ProfileField, bool),
    /// Gender radio selected.
    SelectGender(Gender),
    /// Field lost focus.
    Blur(ProfileField),
    /// Discard edits and return to the initial values.
    Reset,
}

/// Editable field set initialized from a user record.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileForm {
    rules: RuleTable,
    initial: BTreeMap<ProfileField, FieldValue>,
    values: BTreeMap<ProfileField, FieldValue>,
    touched: BTreeSet<ProfileField>,
}

impl ProfileForm {
    /// Form over `user` checked against the standard profile rules.
    #[must_use]
    pub fn from_user(user: &UserRecord) -> Self {
        Self::with_rules(user, PROFILE_RULES)
    }

    /// Form over `user` checked against `rules`.
    #[must_use]
    pub fn with_rules(user: &UserRecord, rules: RuleTable) -> Self {
        let initial: BTreeMap<_, _> = ProfileField::ALL
            .into_iter()
            .filter_map(|field| initial_value(user, field).map(|v| (field, v)))
            .collect();
        Self { rules, values: initial.clone(), initial, touched: BTreeSet::new() }
    }

    /// Next form state after `event`.
    #[must_use]
    pub fn apply(mut self, event: FormEvent) -> Self {
        match event {
            FormEvent::Input(field, text) => {
                // Clearing a field the record never had leaves it unset.
                if text.is_empty() && !self.initial.contains_key(&field) {
                    self.values.remove(&field);
                } else {
                    self.values.insert(field, FieldValue::Text(text));
                }
                self.touched.insert(field);
            }
            FormEvent::Check(field, checked) => {
                self.values.insert(field, FieldValue::Flag(checked));
                self.touched.insert(field);
            }
            FormEvent::SelectGender(gender) => {
                self.values.insert(ProfileField::Gender, FieldValue::Text(gender.as_str().to_owned()));
                self.touched.insert(ProfileField::Gender);
            }
            FormEvent::Blur(field) => {
                self.touched.insert(field);
            }
            FormEvent::Reset => {
                self.values = self.initial.clone();
                self.touched.clear();
            }
        }
        self
    }

    #[must_use]
    pub fn value(&self, field: ProfileField) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Text binding for an input; `""` when unset.
    #[must_use]
    pub fn text(&self, field: ProfileField) -> String {
        self.value(field).map(FieldValue::as_text).unwrap_or_default().to_owned()
    }

    /// Checkbox binding; `false` when unset.
    #[must_use]
    pub fn flag(&self, field: ProfileField) -> bool {
        self.value(field).is_some_and(FieldValue::as_flag)
    }

    #[must_use]
    pub fn gender_checked(&self, gender: Gender) -> bool {
        self.value(ProfileField::Gender).is_some_and(|v| v.as_text() == gender.as_str())
    }

    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.values == self.initial
    }

    /// Rules `field` currently fails.
    #[must_use]
    pub fn errors(&self, field: ProfileField) -> Vec<Rule> {
        failing_rules(self.rules, field, self.value(field))
    }

    /// First failing rule, once the user has interacted with the field.
    #[must_use]
    pub fn visible_error(&self, field: ProfileField) -> Option<Rule> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.errors(field).first().copied()
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        ProfileField::ALL.into_iter().any(|field| !self.errors(field).is_empty())
    }

    #[must_use]
    pub fn is_update_disabled(&self) -> bool {
        self.is_pristine() || self.is_invalid()
    }

    #[must_use]
    pub fn is_reset_disabled(&self) -> bool {
        self.is_pristine()
    }

    /// Current field values keyed by record key.
    #[must_use]
    pub fn values(&self) -> Map<String, Value> {
        self.values.iter().map(|(field, value)| (field.key().to_owned(), value.to_json())).collect()
    }

    /// `user` with the current field values written over it.
    #[must_use]
    pub fn merged_record(&self, user: &UserRecord) -> UserRecord {
        user.merged_with(&self.values())
    }

    /// Merged record to hand to the update handler, or `None` while the
    /// update control is disabled.
    #[must_use]
    pub fn submit(&self, user: &UserRecord) -> Option<UserRecord> {
        if self.is_update_disabled() {
            return None;
        }
        Some(self.merged_record(user))
    }
}

fn initial_value(user: &UserRecord, field: ProfileField) -> Option<FieldValue> {
    if field.is_flag() {
        user.get_bool(field.key()).map(FieldValue::Flag)
    } else {
        user.get_str(field.key()).map(|s| FieldValue::Text(s.to_owned()))
    }
}
