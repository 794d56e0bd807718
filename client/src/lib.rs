//! # client
//!
//! Leptos + WASM frontend for the step navigation bar: a row of reorderable
//! page tabs with inline insertion controls and a per-tab options menu.
//!
//! This crate contains the app shell, pages, components, step-list state,
//! and the Leptos binding for the `sortable` drag-and-drop crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
