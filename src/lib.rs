//! Frame House - studio site
//!
//! Scroll-driven marketing site for a video production studio, with pinned
//! sections that snap into place and a quotation builder, built with Leptos
//! and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
