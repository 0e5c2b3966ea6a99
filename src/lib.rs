//! # category-dashboard
//!
//! Leptos + WASM frontend for account registration, login, and a category
//! CRUD dashboard backed by a remote REST API.
//!
//! This crate contains pages, components, the session store, the protected
//! route guard, form validation, and the typed REST client. Browser-only
//! glue (HTTP, `localStorage`, console logging) sits behind the `csr` feature
//! so everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = config::AppConfig::from_build_env();
    if console_log::init_with_level(config.log_level).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    log::info!("category-dashboard starting; api={}", config.api_base_url);

    leptos::mount::mount_to_body(app::App);
}
