//! Sortable alert table for the dashboard

use dioxus::prelude::*;

use super::StatusBadge;
use crate::state::{SortDir, SortField};
use crate::types::{Alert, AlertStatus};
use crate::util::{format_timestamp, google_maps_url};

#[derive(Props, Clone, PartialEq)]
pub struct AlertTableProps {
    pub alerts: Vec<Alert>,
    pub sort_field: SortField,
    pub sort_dir: SortDir,
    pub on_sort: EventHandler<SortField>,
    pub on_status_change: EventHandler<(i64, AlertStatus)>,
    pub on_delete: EventHandler<i64>,
}

#[component]
pub fn AlertTable(props: AlertTableProps) -> Element {
    let columns = [
        SortField::Id,
        SortField::Name,
        SortField::Timestamp,
        SortField::Status,
    ];

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
            table {
                class: "w-full text-sm",
                thead {
                    tr {
                        class: "border-b border-gray-200 text-left text-gray-500",
                        for field in columns {
                            th {
                                class: "px-4 py-3 cursor-pointer select-none hover:text-gray-900",
                                onclick: move |_| props.on_sort.call(field),
                                {field.label()}
                                if field == props.sort_field {
                                    span { class: "ml-1", {props.sort_dir.arrow()} }
                                }
                            }
                        }
                        th { class: "px-4 py-3", "Location" }
                        th { class: "px-4 py-3", "Actions" }
                    }
                }
                tbody {
                    for alert in props.alerts.iter() {
                        AlertRow {
                            alert: alert.clone(),
                            on_status_change: props.on_status_change,
                            on_delete: props.on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AlertRowProps {
    alert: Alert,
    on_status_change: EventHandler<(i64, AlertStatus)>,
    on_delete: EventHandler<i64>,
}

#[component]
fn AlertRow(props: AlertRowProps) -> Element {
    let alert = &props.alert;
    let alert_id = alert.id;

    rsx! {
        tr {
            class: "border-b border-gray-100 hover:bg-gray-50",
            td { class: "px-4 py-3 font-mono text-gray-400", "#{alert.id}" }
            td {
                class: "px-4 py-3 text-gray-900",
                {alert.name.as_deref().unwrap_or("Unknown")}
            }
            td { class: "px-4 py-3 text-gray-600", {format_timestamp(&alert.timestamp)} }
            td {
                class: "px-4 py-3",
                StatusBadge { status: alert.status }
            }
            td {
                class: "px-4 py-3",
                a {
                    href: google_maps_url(alert.latitude, alert.longitude),
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "text-blue-600 hover:text-blue-700",
                    {format!("{:.4}, {:.4}", alert.latitude, alert.longitude)}
                }
            }
            td {
                class: "px-4 py-3",
                div {
                    class: "flex items-center gap-2",
                    select {
                        class: "border border-gray-300 rounded px-2 py-1",
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
                    button {
                        class: "px-2 py-1 text-red-600 hover:bg-red-50 rounded",
                        onclick: move |_| props.on_delete.call(alert_id),
                        "Delete"
                    }
                }
            }
        }
    }
}
