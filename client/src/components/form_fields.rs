//! Reusable inputs bound to a `ProfileForm` signal.

use leptos::prelude::*;

use crate::form::fields::ProfileField;
use crate::form::messages;
use crate::form::profile::{FormEvent, ProfileForm};

/// Feed `event` into the form signal.
pub fn send(form: RwSignal<ProfileForm>, event: FormEvent) {
    form.update(|f| *f = f.clone().apply(event));
}

/// Inline error for `field`, shown after the user has touched it.
#[component]
pub fn FieldError(form: RwSignal<ProfileForm>, field: ProfileField) -> impl IntoView {
    move || {
        form.with(|f| f.visible_error(field)).map(|rule| {
            view! { <span class="help-block has-error">{messages::rule_error(rule)}</span> }
        })
    }
}

/// Single-line text input with its inline error.
#[component]
pub fn TextField(form: RwSignal<ProfileForm>, field: ProfileField) -> impl IntoView {
    view! {
        <div class="form-group">
            <input
                type="text"
                class="form-control"
                name=field.key()
                placeholder=messages::placeholder(field)
                prop:value=move || form.with(|f| f.text(field))
                on:input=move |ev| send(form, FormEvent::Input(field, event_target_value(&ev)))
                on:blur=move |_| send(form, FormEvent::Blur(field))
            />
            <FieldError form=form field=field/>
        </div>
    }
}
