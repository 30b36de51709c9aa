//! Catch-all for unknown routes

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "max-w-md mx-auto px-4 py-24 text-center",
            div { class: "text-6xl mb-4", "\u{1F9ED}" }
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Page not found" }
            p {
                class: "text-gray-600 mb-6",
                "There's nothing at /{path}"
            }
            Link {
                to: Route::Home {},
                class: "px-6 py-2.5 bg-red-600 text-white rounded-lg hover:bg-red-700",
                "Back to home"
            }
        }
    }
}
