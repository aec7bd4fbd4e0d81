//! Profile edit form: field catalog, validation rules, copy, and view-model.
//!
//! ARCHITECTURE
//! ============
//! Everything here is framework-free so it can be unit tested directly;
//! `components::profile_edit_form` only renders a `ProfileForm` and feeds
//! `FormEvent`s back into it.

pub mod fields;
pub mod messages;
pub mod profile;
pub mod validation;
