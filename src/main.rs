//! ChiliScan Dashboard
//!
//! Chili leaf disease detection dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Mock authentication with login/register screens
//! - Leaf image upload with a simulated disease prediction
//! - Disease catalog, prediction history, and profile pages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend yet: the `api` module stands in for the
//! future inference and persistence services with canned data.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
