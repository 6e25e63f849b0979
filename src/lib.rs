//! # ja-catalogo
//!
//! Leptos + WASM dashboard for the JA Distribuidora catalog system:
//! authentication, product browsing and selection, PDF catalog generation
//! with platform-aware download delivery, download history, and WhatsApp
//! connection status.
//!
//! The crate is a thin client over two HTTP surfaces: the catalog backend
//! (bearer-token auth) and the WhatsApp integration service (tenant header).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the application into `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
