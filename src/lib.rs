//! # graphdeck
//!
//! Leptos + WASM single-page app for managing users and posts against a
//! hosted Hasura GraphQL backend. Queries and mutations go over HTTP; the
//! two live collection subscriptions share one persistent WebSocket.
//!
//! This crate contains pages, components, application state, and the
//! dual-transport GraphQL client in `net`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
