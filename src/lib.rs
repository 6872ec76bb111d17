//! # folio
//!
//! Leptos + WASM client for a single-page portfolio site: loading overlay,
//! navigation, theming, a filterable project grid with detail modal, a
//! contact form delivered through an email relay, scroll reveals, and
//! passive performance logging.
//!
//! Browser glue sits behind the `csr` feature. Without it every state
//! machine, timing rule, and payload builder compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
