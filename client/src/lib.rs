//! # client
//!
//! Leptos + WASM frontend for the Nightlight color-scheme shell. Owns the
//! browser side of scheme handling: the storage, media-query, and document
//! providers behind the `appearance` resolver, the shared theme state, and
//! the toolbar controls that pin an explicit preference or hand control
//! back to the OS.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
