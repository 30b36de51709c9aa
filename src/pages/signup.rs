//! Signup page

use dioxus::prelude::*;
use std::collections::HashMap;

use crate::api::{self, ApiError};
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::session::use_session;
use crate::validation::{validate_email, validate_name, validate_phone};

#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Already signed in; bounce to the profile
    use_effect(move || {
        if !session.is_loading() && session.is_authenticated() {
            navigator.replace(Route::Profile {});
        }
    });
    if session.is_authenticated() {
        return rsx! { LoadingSpinner {} };
    }

    let handle_submit = move |_| {
        let mut errors = HashMap::new();
        if username().trim().is_empty() {
            errors.insert("username".to_string(), "Username is required".to_string());
        }
        if password().len() < 8 {
            errors.insert(
                "password".to_string(),
                "Password must be at least 8 characters".to_string(),
            );
        }
        if let Some(e) = validate_email(email().trim()) {
            errors.insert("email".to_string(), e.to_string());
        }
        if let Some(e) = validate_name(&full_name()) {
            errors.insert("full_name".to_string(), e.to_string());
        }
        if let Some(e) = validate_phone(&phone()) {
            errors.insert("phone".to_string(), e.to_string());
        }
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(HashMap::new());

        let request = api::auth::RegisterRequest {
            username: username().trim().to_string(),
            password: password(),
            email: email().trim().to_string(),
            full_name: full_name().trim().to_string(),
            phone: phone().trim().to_string(),
        };

        let navigator = navigator;
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match api::auth::register(&request).await {
                Ok(response) => {
                    success.set(Some(response.message));
                    navigator.push(Route::Login {});
                }
                Err(ApiError::Validation { fields }) => field_errors.set(fields),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "max-w-md mx-auto px-4 py-12",
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-8",

                h1 { class: "text-2xl font-bold text-gray-900 mb-1", "Create your account" }
                p { class: "text-gray-600 text-sm mb-6", "Register to use SafeTrip emergency services" }

                if let Some(e) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm",
                        "{e}"
                    }
                }

                form {
                    onsubmit: handle_submit,

                    SignupField {
                        label: "Username",
                        input_type: "text",
                        placeholder: "Choose a username",
                        value: username(),
                        error: field_errors.read().get("username").cloned(),
                        on_input: move |v| {
                            username.set(v);
                            field_errors.with_mut(|errs| { errs.remove("username"); });
                        },
                    }
                    SignupField {
                        label: "Password",
                        input_type: "password",
                        placeholder: "At least 8 characters",
                        value: password(),
                        error: field_errors.read().get("password").cloned(),
                        on_input: move |v| {
                            password.set(v);
                            field_errors.with_mut(|errs| { errs.remove("password"); });
                        },
                    }
                    SignupField {
                        label: "Email",
                        input_type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        error: field_errors.read().get("email").cloned(),
                        on_input: move |v| {
                            email.set(v);
                            field_errors.with_mut(|errs| { errs.remove("email"); });
                        },
                    }
                    SignupField {
                        label: "Full Name",
                        input_type: "text",
                        placeholder: "Your full name",
                        value: full_name(),
                        error: field_errors.read().get("full_name").cloned(),
                        on_input: move |v| {
                            full_name.set(v);
                            field_errors.with_mut(|errs| { errs.remove("full_name"); });
                        },
                    }
                    SignupField {
                        label: "Phone Number",
                        input_type: "tel",
                        placeholder: "+91 9876543210",
                        value: phone(),
                        error: field_errors.read().get("phone").cloned(),
                        on_input: move |v| {
                            phone.set(v);
                            field_errors.with_mut(|errs| { errs.remove("phone"); });
                        },
                    }

                    button {
                        r#type: "submit",
                        class: "w-full mt-2 py-2.5 bg-red-600 text-white rounded-lg hover:bg-red-700 disabled:opacity-50",
                        disabled: is_pending(),
                        if is_pending() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "mt-6 text-sm text-gray-600 text-center",
                    "Already have an account? "
                    Link { to: Route::Login {}, class: "text-red-600 hover:text-red-700", "Log in" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SignupFieldProps {
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    error: Option<String>,
    on_input: EventHandler<String>,
}

#[component]
fn SignupField(props: SignupFieldProps) -> Element {
    rsx! {
        div {
            class: "mb-4",
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{props.label}" }
            input {
                r#type: props.input_type,
                value: "{props.value}",
                placeholder: props.placeholder,
                oninput: move |e| props.on_input.call(e.value()),
                class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
            }
            if let Some(e) = props.error {
                p { class: "mt-1 text-xs text-red-600", "{e}" }
            }
        }
    }
}
