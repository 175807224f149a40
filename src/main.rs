//! Activity Board
//!
//! Club activity sign-up board built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with live participant rosters
//! - Email sign-up with client-side validation
//! - Participant removal with local roster patching
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the sign-up service via HTTP/JSON.

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
