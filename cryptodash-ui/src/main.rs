//! Crypto Sentiment Dashboard
//!
//! Browser front-end built with Leptos (WASM). Loads the static JSON resources
//! next to the page, renders asset cards, market overview, a sentiment gauge
//! and a price chart, and reloads every refresh period.
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. All state and rendering
//! decisions live in the `cryptodash` core; this crate supplies the display
//! surface (signals and ECharts instances), the `gloo-net` resource source and
//! the `window.CryptoDashboard` export.

use leptos::*;

mod app;
mod components;
mod echarts;
mod export;
mod source;
mod state;
mod surface;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
