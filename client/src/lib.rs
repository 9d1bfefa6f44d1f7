//! # lockin-client
//!
//! Leptos + WASM landing page for the LockIn focus app.
//!
//! This crate contains the page shell, section components, static content
//! tables, and the two pieces of UI state the page carries: scroll progress
//! and the mobile menu toggle. The `ssr` feature is consumed by the `lockin`
//! server binary; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
