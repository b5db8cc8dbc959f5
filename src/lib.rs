//! # rollcall
//!
//! Leptos + WASM admin console for a student-records REST service.
//!
//! This crate contains pages, components, application state, the REST
//! client, and browser utilities (session storage, theming, CSV export).
//! All server communication goes through `net::api`; everything that
//! touches browser APIs is gated behind the `hydrate` feature so the
//! state modules stay plain Rust and unit-testable on the host.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
