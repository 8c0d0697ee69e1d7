//! # blog-front
//!
//! Leptos + WASM front-end for the blog API.
//!
//! This crate contains the session store, the request pipeline that attaches
//! credentials and normalizes API envelopes, the route table with its
//! navigation guard, and the thin pages that exercise them. Browser glue is
//! gated behind the `csr` feature; everything else runs natively under test.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
