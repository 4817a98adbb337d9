//! # dashboard-client
//!
//! Leptos + WASM frontend for the CI test-result dashboard. Public pages
//! list test runs and their output; admin pages (API keys, profile,
//! statistics) sit behind a token-based login.
//!
//! This crate contains pages, components, application state, the typed
//! REST client, and the request-authorization pipeline that attaches the
//! bearer credential to every outbound call and normalizes every response.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
