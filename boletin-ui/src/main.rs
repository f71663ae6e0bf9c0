//! Boletín Web
//!
//! Daily digest of the Boletín Oficial built with Leptos (WASM).
//!
//! # Features
//!
//! - Entry cards filterable by normalized tag
//! - Category accordion with an active-filter indicator
//! - Statistics dashboard built on first use
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches the feed JSON once (the public URL, or the one
//! stored under `boletin_feed_url` in local storage) and derives everything
//! else with the `boletin` core crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
