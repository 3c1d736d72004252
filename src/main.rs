//! Salesboard
//!
//! Live sales analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Periodic polling of a sales-event feed
//! - Summary cards (total sales, volume, top product)
//! - Sales-over-time and sales-by-product charts
//! - Tabular event log
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It holds no state of its own beyond the most recently fetched
//! event batch: every poll wholly replaces the previous batch, and all chart
//! and summary data is derived from it on render.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
