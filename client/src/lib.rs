//! # client
//!
//! Leptos + WASM frontend for the goLogoLo editor.
//!
//! Screens and modals render the controls; the `host` module (browser only)
//! binds them by element id to the `logo` controller core and applies the
//! actions it returns. All state lives in page memory.

pub mod app;
pub mod components;
#[cfg(feature = "hydrate")]
pub mod host;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
