//! Profile form field catalog.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

/// Locale choices offered by the locale select.
pub const LOCALES: [&str; 5] = ["en-GB", "en-AU", "es-ES", "es-CR", "es-NI"];

/// Editable fields of the profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    GivenName,
    FamilyName,
    Nickname,
    Email,
    EmailVerified,
    Gender,
    Locale,
    Notes,
}

impl ProfileField {
    pub const ALL: [Self; 8] = [
        Self::GivenName,
        Self::FamilyName,
        Self::Nickname,
        Self::Email,
        Self::EmailVerified,
        Self::Gender,
        Self::Locale,
        Self::Notes,
    ];

    /// Key of this field in the user record.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::GivenName => "givenName",
            Self::FamilyName => "familyName",
            Self::Nickname => "nickname",
            Self::Email => "email",
            Self::EmailVerified => "emailVerified",
            Self::Gender => "gender",
            Self::Locale => "locale",
            Self::Notes => "notes",
        }
    }

    /// Checkbox fields hold a flag instead of text.
    #[must_use]
    pub fn is_flag(self) -> bool {
        matches!(self, Self::EmailVerified)
    }
}

/// The two gender radio values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Current value of a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Text content, or `""` for flags.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Flag(_) => "",
        }
    }

    #[must_use]
    pub fn as_flag(&self) -> bool {
        matches!(self, Self::Flag(true))
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Text(text) => serde_json::Value::String(text.clone()),
            Self::Flag(flag) => serde_json::Value::Bool(*flag),
        }
    }
}
