//! # lilac-admin
//!
//! Leptos + WASM admin console for the user-center backend.
//!
//! This crate contains the route table, the global navigation guard that
//! restricts `/admin` routes, the session store holding the logged-in user,
//! and the HTTP client wrapper that classifies every response and surfaces
//! errors and session-expiry redirects in one place. Pages and components
//! sit on top of those.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
