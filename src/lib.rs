// lib.rs - Root module for the storefront library
//
// The web application lives in `web_app`; `fixtures` holds sample catalog
// payloads shared by unit and integration tests.

/// Sample backend responses for tests and local experiments
pub mod fixtures;

pub mod web_app;

/// WASM entry point, called by the generated hydration script
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
