//! # pos-client
//!
//! Leptos + WASM frontend for a point-of-sale system: the sign-in flow and
//! the persisted session layer that routes staff to their role dashboards.
//!
//! The browser owns session truth. One `localStorage` record is written
//! only after a successful login and cleared unconditionally on logout;
//! pages and components read it through the
//! [`state::session::SessionStore`] capability provided via context.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging hooks, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
