//! Dismissible error banner

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    pub on_dismiss: EventHandler<()>,
}

/// Banner for remote/network/geolocation errors. Field-level validation
/// errors render next to their fields instead.
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    rsx! {
        div {
            class: "flex items-start justify-between bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-4",
            div {
                strong { "\u{26A0}\u{FE0F} Error " }
                p { class: "mt-1 text-sm", "{props.message}" }
            }
            button {
                class: "text-red-400 hover:text-red-600 ml-4",
                onclick: move |_| props.on_dismiss.call(()),
                "\u{2715}"
            }
        }
    }
}
