//! Reusable UI components.

pub mod form_fields;
pub mod profile_edit_form;
