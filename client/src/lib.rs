//! # client
//!
//! Leptos + WASM frontend shell for the VOLTX learning platform.
//!
//! This crate contains the site header with its login/register flow, the
//! client-side auth/course store, toast notifications, and the route pages
//! the header navigates between. The same crate is compiled twice: once with
//! `ssr` for the host server and once with `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating voltx client");
    leptos::mount::hydrate_body(app::App);
}
