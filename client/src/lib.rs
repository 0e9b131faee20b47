//! # client
//!
//! Leptos + WASM frontend for the research paper discovery tool. A user
//! enters an AI technology topic, reads the generated summary, browses the
//! retrieved papers, and asks follow-up questions against the RAG session
//! built for that topic.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Network calls only run in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
