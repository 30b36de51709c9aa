//! SafeTrip - browser emergency alert client
//!
//! A Dioxus web (WASM) single-page app talking to the SafeTrip REST backend.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod config;
mod geo;
mod pages;
mod routes;
mod session;
mod sos;
mod sound;
mod state;
mod types;
mod util;
mod validation;

fn main() {
    // tracing output lands in the browser console
    dioxus::logger::initialize_default();

    dioxus::launch(app::App);
}
