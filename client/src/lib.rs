//! # profile-client
//!
//! Leptos + WASM frontend for editing the signed-in user's profile.
//!
//! This crate contains the session store and auth actions, the profile form
//! view-model and its components, the login and profile pages, and the REST
//! helpers for the profile endpoint. The `profile-desk` server renders it via
//! SSR and the browser hydrates it.

pub mod app;
pub mod components;
pub mod form;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
