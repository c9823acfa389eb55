//! # client
//!
//! Leptos + WASM frontend for the Blockchain Insper site and its admin back
//! office. Public pages read content from the REST backend; admin pages sit
//! behind the route guard and share one auth session.
//!
//! Everything that talks HTTP or storage goes through the `portal` crate;
//! this crate adds the browser transport, `localStorage`, and the UI.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
