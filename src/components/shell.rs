//! Application shell layout

use dioxus::prelude::*;

use super::Navbar;
use crate::routes::Route;

/// Layout component wrapping every page with the navbar.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Navbar {}
            main {
                Outlet::<Route> {}
            }
        }
    }
}
