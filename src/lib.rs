//! Stack Echo — browser client for a community Q&A site.
//!
//! ARCHITECTURE
//! ============
//! `state` owns the process-wide session store, `net` talks to the external
//! identity providers and normalizes their results, `util` carries the login
//! orchestration shared by every sign-in entry point, and `pages`/`components`
//! render routes and chrome on top of the shared store.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: wire up panic/log reporting and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
