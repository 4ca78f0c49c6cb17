//! # safewatch
//!
//! Leptos + WASM frontend for the community safety-information dashboard.
//! Renders card grids of sample safety records (missing persons, weather
//! alerts, road closures, crime zones) behind a collapsible sidebar, and
//! embeds a Google Maps widget driven by the loader in [`map`].
//!
//! Everything is client-rendered from in-memory constants; there is no
//! backend and no persistence.

pub mod app;
pub mod components;
pub mod config;
pub mod map;
pub mod pages;
pub mod records;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
