//! EmonView
//!
//! Energy monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Live power draw and usage-today readings
//! - Continuous power line chart and 14-day usage bar chart
//! - Modal configuration flow with persisted settings
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The screen binds a reactive view-model's output signals to
//! labels and canvas chart widgets; a simulated feed regenerates the
//! view-model's snapshot while the screen is active and configured.

use leptos::*;

mod app;
mod chart;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
