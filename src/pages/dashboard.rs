//! Authority dashboard - alert collection view
//!
//! Fetches the collection on mount, refreshes every 30 seconds from a
//! component-scoped task (cancelled with the component, so no leaked timer),
//! and applies client-side filter/sort. Status changes replace the matching
//! element with the server-confirmed object; a failed update leaves local
//! state untouched.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api;
use crate::components::{AlertCard, AlertTable, ErrorBanner, LoadingSpinner};
use crate::routes::Route;
use crate::session::{use_session, SessionState};
use crate::state::{next_sort, sort_alerts, AlertStats, SortDir, SortField, StatusFilter};
use crate::types::{Alert, AlertStatus};

const REFRESH_INTERVAL_MS: u32 = 30_000;

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Cards,
    Table,
}

async fn refresh_alerts(
    mut alerts: Signal<Vec<Alert>>,
    mut error: Signal<Option<String>>,
    mut loading: Signal<bool>,
) {
    match api::alerts::list_alerts().await {
        Ok(list) => {
            alerts.set(list);
            error.set(None);
        }
        Err(e) => {
            tracing::warn!(%e, "alert fetch failed");
            // Keep showing stale data if we have any
            if alerts.peek().is_empty() {
                error.set(Some(e.to_string()));
            }
        }
    }
    loading.set(false);
}

/// Redirect target for a session that may not view the dashboard.
fn access_redirect(state: &SessionState) -> Option<Route> {
    if !state.is_authenticated() {
        Some(Route::Login {})
    } else if !state.is_authority() {
        Some(Route::Home {})
    } else {
        None
    }
}

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let alerts = use_signal(Vec::<Alert>::new);
    let loading = use_signal(|| true);
    let error = use_signal(|| None::<String>);
    let mut refreshing = use_signal(|| false);
    let mut filter = use_signal(StatusFilter::default);
    let mut sort_field = use_signal(SortField::default);
    let mut sort_dir = use_signal(SortDir::default);
    let mut view_mode = use_signal(|| ViewMode::Cards);
    let mut action_error = use_signal(|| None::<String>);

    // Initial fetch + periodic refresh; the task dies with the component
    use_future(move || async move {
        refresh_alerts(alerts, error, loading).await;
        loop {
            TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
            refresh_alerts(alerts, error, loading).await;
        }
    });

    // Send sessions that may not view this page away once identity is known
    use_effect(move || {
        if session.is_loading() {
            return;
        }
        if let Some(target) = access_redirect(&session.snapshot()) {
            navigator.replace(target);
        }
    });

    // Placeholder until the redirect above lands; hooks stay above this
    if session.is_loading() || access_redirect(&session.snapshot()).is_some() {
        return rsx! { LoadingSpinner {} };
    }

    let handle_manual_refresh = move |_| {
        spawn(async move {
            refreshing.set(true);
            refresh_alerts(alerts, error, loading).await;
            refreshing.set(false);
        });
    };

    let handle_status_change = move |(id, status): (i64, AlertStatus)| {
        let mut alerts = alerts;
        spawn(async move {
            match api::alerts::update_status(id, status).await {
                Ok(updated) => {
                    alerts.with_mut(|list| crate::state::replace_alert(list, updated));
                    action_error.set(None);
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete = move |id: i64| {
        let mut alerts = alerts;
        spawn(async move {
            match api::alerts::delete_alert(id).await {
                Ok(()) => {
                    alerts.with_mut(|list| list.retain(|a| a.id != id));
                    action_error.set(None);
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    let handle_sort = move |clicked: SortField| {
        // read guards drop at the end of this statement, before the writes
        let (field, dir) = next_sort(*sort_field.peek(), *sort_dir.peek(), clicked);
        sort_field.set(field);
        sort_dir.set(dir);
    };

    let all_alerts = alerts.read();
    let stats = AlertStats::compute(&all_alerts);
    let mut visible = filter.read().apply(&all_alerts);
    if view_mode() == ViewMode::Table {
        sort_alerts(&mut visible, *sort_field.read(), *sort_dir.read());
    }

    if loading() && all_alerts.is_empty() {
        return rsx! { LoadingSpinner {} };
    }

    rsx! {
        div {
            class: "max-w-6xl mx-auto px-4 py-8",

            div {
                class: "flex items-center justify-between mb-6",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "\u{1F6A8} Emergency Alerts Dashboard" }
                    p { class: "text-gray-600 text-sm", "Monitor and respond to emergency alerts in real-time" }
                }
                div {
                    class: "flex items-center gap-2",
                    button {
                        class: "px-3 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 text-sm",
                        onclick: move |_| view_mode.set(match view_mode() {
                            ViewMode::Cards => ViewMode::Table,
                            ViewMode::Table => ViewMode::Cards,
                        }),
                        if view_mode() == ViewMode::Cards { "\u{1F4CB} Table view" } else { "\u{1F5C3} Card view" }
                    }
                    button {
                        class: "px-3 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 text-sm disabled:opacity-50",
                        disabled: refreshing(),
                        onclick: handle_manual_refresh,
                        if refreshing() { "\u{1F504} Refreshing..." } else { "\u{1F504} Refresh" }
                    }
                }
            }

            if let Some(message) = error() {
                ErrorBanner {
                    message,
                    on_dismiss: {
                        let mut error = error;
                        move |_| error.set(None)
                    },
                }
            }
            if let Some(message) = action_error() {
                ErrorBanner {
                    message,
                    on_dismiss: move |_| action_error.set(None),
                }
            }

            // Stats grid
            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-6",
                StatCard { title: "Total Alerts", value: stats.total, icon: "\u{1F4CA}" }
                StatCard { title: "Pending", value: stats.pending, icon: "\u{23F3}" }
                StatCard { title: "In Progress", value: stats.in_progress, icon: "\u{1F680}" }
                StatCard { title: "Resolved", value: stats.resolved, icon: "\u{2705}" }
            }

            // Status filters
            div {
                class: "flex flex-wrap gap-2 mb-6",
                for variant in StatusFilter::variants() {
                    button {
                        class: if *variant == filter() {
                            "px-3 py-1.5 bg-red-600 text-white rounded-full text-sm"
                        } else {
                            "px-3 py-1.5 bg-white border border-gray-300 text-gray-700 rounded-full text-sm hover:bg-gray-50"
                        },
                        onclick: {
                            let variant = *variant;
                            move |_| filter.set(variant)
                        },
                        {variant.label()}
                        span {
                            class: "ml-1 text-xs opacity-75",
                            {variant.count(&stats).to_string()}
                        }
                    }
                }
            }

            if visible.is_empty() {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                    div { class: "text-4xl mb-2", "\u{1F4ED}" }
                    h3 { class: "font-semibold text-gray-900", "No alerts found" }
                    p { class: "text-gray-500 text-sm", "There are no matching alerts at the moment." }
                }
            } else {
                match view_mode() {
                    ViewMode::Cards => rsx! {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                            for alert in visible.iter() {
                                AlertCard {
                                    key: "{alert.id}",
                                    alert: alert.clone(),
                                    on_status_change: handle_status_change,
                                }
                            }
                        }
                    },
                    ViewMode::Table => rsx! {
                        AlertTable {
                            alerts: visible.clone(),
                            sort_field: *sort_field.read(),
                            sort_dir: *sort_dir.read(),
                            on_sort: handle_sort,
                            on_status_change: handle_status_change,
                            on_delete: handle_delete,
                        }
                    },
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: usize,
    icon: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-4 flex items-center gap-3",
            div { class: "text-2xl", "{props.icon}" }
            div {
                p { class: "text-2xl font-bold text-gray-900", "{props.value}" }
                p { class: "text-xs text-gray-500", "{props.title}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, User};

    fn session_with(role: Role) -> SessionState {
        let mut state = SessionState::default();
        state.apply_login(
            User {
                id: 1,
                username: "vera".to_string(),
                email: None,
                full_name: None,
                contact_no: None,
                role,
            },
            None,
        );
        state
    }

    #[test]
    fn anonymous_viewers_are_sent_to_login() {
        assert_eq!(
            access_redirect(&SessionState::default()),
            Some(Route::Login {})
        );
    }

    #[test]
    fn plain_users_are_sent_home() {
        assert_eq!(
            access_redirect(&session_with(Role::User)),
            Some(Route::Home {})
        );
    }

    #[test]
    fn authorities_may_view() {
        assert_eq!(access_redirect(&session_with(Role::Authority)), None);
    }
}
