//! # landing-client
//!
//! Leptos frontend for the StreamLine marketing landing page and the TRVL
//! travel site. Built as an `rlib` for server-side rendering (`ssr`) and as a
//! WASM `cdylib` that hydrates the server markup in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
