//! Profile edit form component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a `ProfileForm` built from the current user and forwards the
//! merged record to `on_update`. Saving is the caller's job; this component
//! never talks to the network.

use leptos::prelude::*;

use super::form_fields::{TextField, send};
use crate::form::fields::{Gender, LOCALES, ProfileField};
use crate::form::messages;
use crate::form::profile::{FormEvent, ProfileForm};
use crate::state::user::UserRecord;

#[component]
pub fn ProfileEditForm(user: UserRecord, on_update: Callback<UserRecord>) -> impl IntoView {
    let form = RwSignal::new(ProfileForm::from_user(&user));
    let picture = user.get_str("picture").unwrap_or_default().to_owned();
    let user = StoredValue::new(user);

    let update = move || {
        let merged = user.with_value(|u| form.with_untracked(|f| f.submit(u)));
        if let Some(merged) = merged {
            on_update.run(merged);
        }
    };
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        update();
    };

    let gender_radios = Gender::ALL
        .into_iter()
        .map(|gender| {
            view! {
                <label class="radio-inline">
                    <input
                        type="radio"
                        class="radio"
                        name="gender"
                        value=gender.as_str()
                        prop:checked=move || form.with(|f| f.gender_checked(gender))
                        on:change=move |_| send(form, FormEvent::SelectGender(gender))
                    />
                    {messages::gender_label(gender)}
                </label>
            }
        })
        .collect_view();

    let locale_options = LOCALES
        .iter()
        .map(|locale| view! { <option value=*locale>{*locale}</option> })
        .collect_view();

    view! {
        <div class="profile-edit">
            <form on:submit=on_submit>
                <div class="row">
                    <div class="col-sm-2">
                        <img class="profile-edit__picture" src=picture/>
                    </div>
                    <div class="col-sm-5">
                        <TextField form=form field=ProfileField::GivenName/>
                        <TextField form=form field=ProfileField::FamilyName/>
                        <TextField form=form field=ProfileField::Nickname/>
                        <TextField form=form field=ProfileField::Email/>
                        <div class="checkbox">
                            <label>
                                <input
                                    type="checkbox"
                                    name="emailVerified"
                                    prop:checked=move || form.with(|f| f.flag(ProfileField::EmailVerified))
                                    on:change=move |ev| {
                                        send(form, FormEvent::Check(ProfileField::EmailVerified, event_target_checked(&ev)));
                                    }
                                />
                                {messages::label(ProfileField::EmailVerified)}
                            </label>
                        </div>
                    </div>
                    <div class="col-sm-5">
                        <div class="form-group">{gender_radios}</div>
                        <div class="form-group">
                            <label>{messages::label(ProfileField::Locale)}</label>
                            <select
                                class="form-control"
                                name="locale"
                                prop:value=move || form.with(|f| f.text(ProfileField::Locale))
                                on:change=move |ev| {
                                    send(form, FormEvent::Input(ProfileField::Locale, event_target_value(&ev)));
                                }
                            >
                                {locale_options}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>{messages::label(ProfileField::Notes)}</label>
                            <textarea
                                class="form-control"
                                name="notes"
                                prop:value=move || form.with(|f| f.text(ProfileField::Notes))
                                on:input=move |ev| {
                                    send(form, FormEvent::Input(ProfileField::Notes, event_target_value(&ev)));
                                }
                            ></textarea>
                        </div>
                    </div>
                </div>
                <div class="row">
                    <div class="col-sm-2"></div>
                    <div class="col-sm-10 profile-edit__actions">
                        <button
                            type="button"
                            class="btn btn--primary"
                            disabled=move || form.with(ProfileForm::is_update_disabled)
                            on:click=move |_| update()
                        >
                            {messages::SAVE_LABEL}
                        </button>
                        <button
                            type="button"
                            class="btn"
                            disabled=move || form.with(ProfileForm::is_reset_disabled)
                            on:click=move |_| send(form, FormEvent::Reset)
                        >
                            {messages::RESET_LABEL}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
