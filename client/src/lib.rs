//! # client
//!
//! Leptos + WASM frontend for the Valentine proposal page.
//!
//! This crate contains the page, its components, page-local state machines,
//! and the embedded content document. Built with `ssr` it is rendered by the
//! `server` binary; built with `hydrate` it becomes the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
