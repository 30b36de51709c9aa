//! SOS page - emergency alert submission
//!
//! Drives the submission pipeline: validate (anonymous only) → siren cue →
//! fresh geolocation fix → exactly one create call → success redirect. The
//! whole pipeline runs in one component-scoped task, so navigating away
//! cancels it and a late fix is dropped with the task.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use std::collections::HashMap;

use crate::api::{self, ApiError};
use crate::geo::{self, GeoOptions};
use crate::routes::Route;
use crate::session::use_session;
use crate::sos::{
    compose_payload, validate_form, SosForm, SubmitPhase, SIREN_MS, SUCCESS_REDIRECT_MS,
};
use crate::{components::ErrorBanner, sound};

#[component]
pub fn Sos() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut form = use_signal(SosForm::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut banner_error = use_signal(|| None::<String>);
    let mut phase = use_signal(SubmitPhase::default);

    let snapshot = session.snapshot();
    let authenticated = snapshot.is_authenticated();
    let display_name = snapshot.display_name();
    let emergency_phone = snapshot.emergency_phone();

    let handle_submit = move |_| {
        // At-most-one submission per user action: ignore triggers while a
        // previous one is still in flight.
        if !phase.peek().accepts_submit() {
            return;
        }

        let session = session;
        let navigator = navigator;
        spawn(async move {
            phase.set(SubmitPhase::Validating);
            banner_error.set(None);

            let snapshot = session.snapshot();
            let current_form = form.peek().clone();

            let errors = validate_form(&snapshot, &current_form);
            if !errors.is_empty() {
                field_errors.set(errors);
                phase.set(SubmitPhase::Failed);
                return;
            }
            field_errors.set(HashMap::new());

            // Local feedback cue; never gates the submission
            sound::play_siren(SIREN_MS);

            phase.set(SubmitPhase::Locating);
            let fix = match geo::acquire(&GeoOptions::default()).await {
                Ok(fix) => fix,
                Err(e) => {
                    banner_error.set(Some(e.to_string()));
                    phase.set(SubmitPhase::Failed);
                    return;
                }
            };

            phase.set(SubmitPhase::Submitting);
            let payload = compose_payload(&snapshot, &current_form, &fix);
            match api::alerts::create_alert(&payload).await {
                Ok(alert) => {
                    tracing::info!(id = alert.id, "SOS alert created");
                    phase.set(SubmitPhase::Succeeded);
                    if !snapshot.is_authenticated() {
                        form.set(SosForm::default());
                    }
                    TimeoutFuture::new(SUCCESS_REDIRECT_MS).await;
                    navigator.push(Route::Dashboard {});
                }
                Err(ApiError::Validation { fields }) => {
                    field_errors.set(fields);
                    banner_error.set(Some("Please fix the errors and try again".to_string()));
                    phase.set(SubmitPhase::Failed);
                }
                Err(e) => {
                    banner_error.set(Some(e.to_string()));
                    phase.set(SubmitPhase::Failed);
                }
            }
        });
    };

    rsx! {
        div {
            class: "max-w-xl mx-auto px-4 py-8",

            div {
                class: "text-center mb-6",
                div { class: "text-5xl mb-2", "\u{1F6A8}" }
                h1 { class: "text-2xl font-bold text-gray-900", "Emergency SOS Alert" }
                p {
                    class: "text-gray-600",
                    "Send your location to emergency services immediately"
                }
            }

            if phase() == SubmitPhase::Succeeded {
                div {
                    class: "bg-green-50 border border-green-200 text-green-700 p-4 rounded-lg mb-4",
                    strong { "\u{2705} Alert Sent Successfully!" }
                    p {
                        class: "text-sm mt-1",
                        "Your emergency alert has been sent with your location. Redirecting to the dashboard..."
                    }
                }
            }

            if let Some(message) = banner_error() {
                ErrorBanner {
                    message,
                    on_dismiss: move |_| banner_error.set(None),
                }
            }

            if authenticated {
                div {
                    class: "bg-blue-50 border border-blue-200 text-blue-800 p-3 rounded-lg text-sm mb-4",
                    "Sending as "
                    strong { {display_name.unwrap_or_default()} }
                    if let Some(phone) = emergency_phone {
                        span { " \u{2022} Emergency contact will be notified: {phone}" }
                    }
                }
            }

            form {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                onsubmit: handle_submit,

                if !authenticated {
                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Your Full Name "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            r#type: "text",
                            value: "{form.read().name}",
                            oninput: move |e| {
                                form.with_mut(|f| f.name = e.value());
                                field_errors.with_mut(|errs| { errs.remove("name"); });
                            },
                            placeholder: "Enter your full name",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                        }
                        if let Some(e) = field_errors.read().get("name") {
                            p { class: "mt-1 text-xs text-red-600", "{e}" }
                        }
                    }

                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Phone Number "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            r#type: "tel",
                            value: "{form.read().phone}",
                            oninput: move |e| {
                                form.with_mut(|f| f.phone = e.value());
                                field_errors.with_mut(|errs| { errs.remove("phone"); });
                            },
                            placeholder: "+91 9876543210",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                        }
                        if let Some(e) = field_errors.read().get("phone") {
                            p { class: "mt-1 text-xs text-red-600", "{e}" }
                        }
                    }

                    p {
                        class: "text-xs text-gray-500",
                        Link { to: Route::Login {}, class: "text-blue-600", "Log in" }
                        " and set up your profile to skip this form next time."
                    }
                }

                if phase() == SubmitPhase::Locating {
                    p {
                        class: "text-sm text-gray-600",
                        "Getting your location\u{2026} Please allow when your browser asks, or enable location/GPS and try again."
                    }
                }

                button {
                    r#type: "submit",
                    class: "w-full py-3 bg-red-600 text-white rounded-lg hover:bg-red-700 font-semibold disabled:opacity-50 disabled:cursor-not-allowed",
                    disabled: phase().in_flight(),
                    {phase().button_label()}
                }
            }

            div {
                class: "mt-8 bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h3 { class: "font-semibold text-gray-900 mb-3", "Emergency Helplines" }
                div {
                    class: "grid grid-cols-3 gap-3 text-center text-sm",
                    div {
                        div { class: "text-2xl", "\u{1F694}" }
                        p { class: "text-gray-600", "Police" }
                        p { class: "font-bold", "100" }
                    }
                    div {
                        div { class: "text-2xl", "\u{1F691}" }
                        p { class: "text-gray-600", "Ambulance" }
                        p { class: "font-bold", "108" }
                    }
                    div {
                        div { class: "text-2xl", "\u{1F469}" }
                        p { class: "text-gray-600", "Women Helpline" }
                        p { class: "font-bold", "181" }
                    }
                }
            }
        }
    }
}
