//! # client
//!
//! Leptos + WASM frontend for the PostCraft social-post generator.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the generation backend. The `server` crate renders it with SSR;
//! the `hydrate` feature builds the browser bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("api base url: {}", config::api_base_url());
    leptos::mount::hydrate_body(app::App);
}
