pub mod api;
pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod logging;
pub mod markdown;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
