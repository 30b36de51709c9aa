//! Alert card for the dashboard grid view

use dioxus::prelude::*;

use super::StatusBadge;
use crate::types::{Alert, AlertStatus};
use crate::util::{format_timestamp, google_maps_url};

#[derive(Props, Clone, PartialEq)]
pub struct AlertCardProps {
    pub alert: Alert,
    pub on_status_change: EventHandler<(i64, AlertStatus)>,
}

#[component]
pub fn AlertCard(props: AlertCardProps) -> Element {
    let alert = &props.alert;
    let alert_id = alert.id;
    let initial = alert
        .name
        .as_deref()
        .and_then(|n| n.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 flex flex-col gap-3",

            div {
                class: "flex items-center justify-between",
                span { class: "text-xs text-gray-400 font-mono", "#{alert.id}" }
                StatusBadge { status: alert.status }
            }

            div {
                class: "flex items-center gap-3",
                div {
                    class: "w-10 h-10 rounded-full bg-red-100 text-red-700 flex items-center justify-center font-bold",
                    "{initial}"
                }
                div {
                    h3 {
                        class: "font-medium text-gray-900",
                        {alert.name.as_deref().unwrap_or("Unknown")}
                    }
                    p {
                        class: "text-sm text-gray-500",
                        "\u{1F4DE} "
                        {alert.phone.as_deref().unwrap_or("No phone")}
                    }
                }
            }

            div {
                class: "text-sm text-gray-600 space-y-1",
                p { "\u{1F552} " {format_timestamp(&alert.timestamp)} }
                p { "\u{1F4CD} " {format!("{:.4}, {:.4}", alert.latitude, alert.longitude)} }
                if let Some(message) = &alert.message {
                    p { class: "italic", "\u{1F4AC} {message}" }
                }
            }

            div {
                class: "flex items-center justify-between mt-auto pt-2 border-t border-gray-100",
                a {
                    href: google_maps_url(alert.latitude, alert.longitude),
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "text-sm text-blue-600 hover:text-blue-700",
                    "\u{1F5FA} View on Map"
                }
                select {
                    class: "text-sm border border-gray-300 rounded px-2 py-1",
                    value: alert.status.code(),
                    onchange: move |e| {
                        if let Some(status) = AlertStatus::from_code(&e.value()) {
                            props.on_status_change.call((alert_id, status));
                        }
                    },
                    for status in AlertStatus::variants() {
                        option { value: status.code(), {status.label()} }
                    }
                }
            }
        }
    }
}
