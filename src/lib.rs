//! # authgate
//!
//! Leptos + WASM authentication gate for a single-page application backed by
//! an external identity hub.
//!
//! `AuthGuard` protects routes and sends anonymous visitors to the hub,
//! `CallbackPage` completes the OAuth authorization-code exchange once per
//! page load, and `HubSession` owns the cookie-backed session state both of
//! them read.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
