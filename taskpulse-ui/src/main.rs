//! Taskpulse Dashboard
//!
//! Personal productivity dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Live clock in the header
//! - Animated stat counters (completed tasks, hours worked, active projects)
//! - Task list with add, complete and delete
//! - Auto-dismissing toast notifications
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The `taskpulse` dashboard controller runs in the page and
//! renders through reactive signals; browser intervals drive its clock,
//! progress and frame ticks.

use leptos::*;

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
