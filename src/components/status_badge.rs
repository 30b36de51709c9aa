//! Alert status badge

use dioxus::prelude::*;

use crate::types::AlertStatus;

#[component]
pub fn StatusBadge(status: AlertStatus) -> Element {
    let classes = match status {
        AlertStatus::Pending => "bg-amber-100 text-amber-800",
        AlertStatus::InProgress => "bg-blue-100 text-blue-800",
        AlertStatus::Resolved => "bg-green-100 text-green-800",
    };

    rsx! {
        span {
            class: "inline-block px-2 py-0.5 rounded-full text-xs font-medium {classes}",
            {status.label()}
        }
    }
}
