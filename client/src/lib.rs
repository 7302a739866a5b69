//! # client
//!
//! Leptos + WASM front-end for the account portal: login, signup, and the
//! protected user page.
//!
//! Every decision (password rules, form validity, route gating, submit
//! outcomes) is delegated to the `portal` crate. This crate supplies the
//! browser collaborators: HTTP credential calls, the `sessionStorage` session
//! signal, and the toast stack.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("portal client starting");
    leptos::mount::mount_to_body(app::App);
}
