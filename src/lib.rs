//! # teslo-client
//!
//! Leptos + WASM storefront client for the Teslo shop backend.
//!
//! The core of this crate is the client-side session: a `SessionStore`
//! that resolves and tracks the tri-state authentication status, the three
//! auth actions that talk to the REST backend, and a parameterized route
//! guard that renders or redirects from that status. Pages and components
//! are thin consumers of the store.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
