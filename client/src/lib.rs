//! # client
//!
//! Leptos + WASM front end for Heritage Atlas, a catalog of GI-tagged
//! artisan products organized by region.
//!
//! This crate contains pages, components, view state, the backend API client
//! and the session guard. The `hydrate` feature builds the browser bundle;
//! `ssr` builds the server-rendered side used by the host binary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    log::info!("hydrating Heritage Atlas");
    leptos::mount::hydrate_body(app::App);
}
