//! Login page - password and email OTP flows

use dioxus::prelude::*;

use crate::api;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::session::use_session;
use crate::validation::validate_email;

#[derive(Clone, Copy, PartialEq)]
enum LoginMode {
    Password,
    Otp,
}

#[derive(Clone, Copy, PartialEq)]
enum OtpStep {
    Email,
    Code,
}

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut mode = use_signal(|| LoginMode::Password);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut otp_step = use_signal(|| OtpStep::Email);
    let mut error = use_signal(|| None::<String>);
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

    let handle_password_login = move |_| {
        let user = username().trim().to_string();
        let pass = password();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("Please enter your username and password".to_string()));
            return;
        }

        let mut session = session;
        let navigator = navigator;
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match session.login(&user, &pass).await {
                Ok(()) => {
                    navigator.push(Route::Profile {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    let handle_request_otp = move |_| {
        let address = email().trim().to_string();
        if let Some(e) = validate_email(&address) {
            error.set(Some(e.to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match api::auth::request_otp(&address).await {
                Ok(_) => otp_step.set(OtpStep::Code),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    let handle_verify_otp = move |_| {
        let address = email().trim().to_string();
        let otp = code().trim().to_string();
        if otp.is_empty() {
            error.set(Some("Please enter the verification code".to_string()));
            return;
        }

        let mut session = session;
        let navigator = navigator;
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match session.verify_otp(&address, &otp).await {
                Ok(()) => {
                    navigator.push(Route::Profile {});
                }
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

                h1 { class: "text-2xl font-bold text-gray-900 mb-1", "Log in" }
                p { class: "text-gray-600 text-sm mb-6", "Sign in to your SafeTrip account" }

                if let Some(e) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm",
                        "{e}"
                    }
                }

                div {
                    class: "flex gap-2 mb-6",
                    button {
                        class: if mode() == LoginMode::Password {
                            "flex-1 py-2 bg-red-600 text-white rounded text-sm"
                        } else {
                            "flex-1 py-2 bg-gray-100 text-gray-700 rounded text-sm hover:bg-gray-200"
                        },
                        onclick: move |_| { mode.set(LoginMode::Password); error.set(None); },
                        "Password"
                    }
                    button {
                        class: if mode() == LoginMode::Otp {
                            "flex-1 py-2 bg-red-600 text-white rounded text-sm"
                        } else {
                            "flex-1 py-2 bg-gray-100 text-gray-700 rounded text-sm hover:bg-gray-200"
                        },
                        onclick: move |_| { mode.set(LoginMode::Otp); error.set(None); },
                        "Email OTP"
                    }
                }

                match mode() {
                    LoginMode::Password => rsx! {
                        form {
                            onsubmit: handle_password_login,
                            div {
                                class: "mb-4",
                                label { class: "block text-sm font-medium text-gray-700 mb-1", "Username" }
                                input {
                                    r#type: "text",
                                    value: "{username}",
                                    oninput: move |e| username.set(e.value()),
                                    placeholder: "Enter username",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                                    disabled: is_pending(),
                                }
                            }
                            div {
                                class: "mb-6",
                                label { class: "block text-sm font-medium text-gray-700 mb-1", "Password" }
                                input {
                                    r#type: "password",
                                    value: "{password}",
                                    oninput: move |e| password.set(e.value()),
                                    placeholder: "Enter password",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                                    disabled: is_pending(),
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "w-full py-2.5 bg-red-600 text-white rounded-lg hover:bg-red-700 disabled:opacity-50",
                                disabled: is_pending(),
                                if is_pending() { "Signing in..." } else { "Log in" }
                            }
                        }
                    },
                    LoginMode::Otp => rsx! {
                        match otp_step() {
                            OtpStep::Email => rsx! {
                                form {
                                    onsubmit: handle_request_otp,
                                    div {
                                        class: "mb-6",
                                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Email" }
                                        input {
                                            r#type: "email",
                                            value: "{email}",
                                            oninput: move |e| email.set(e.value()),
                                            placeholder: "you@example.com",
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                                            disabled: is_pending(),
                                        }
                                    }
                                    button {
                                        r#type: "submit",
                                        class: "w-full py-2.5 bg-red-600 text-white rounded-lg hover:bg-red-700 disabled:opacity-50",
                                        disabled: is_pending(),
                                        if is_pending() { "Sending..." } else { "Send Code" }
                                    }
                                }
                            },
                            OtpStep::Code => rsx! {
                                form {
                                    onsubmit: handle_verify_otp,
                                    div {
                                        class: "mb-4",
                                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Verification Code" }
                                        input {
                                            r#type: "text",
                                            value: "{code}",
                                            oninput: move |e| code.set(e.value()),
                                            placeholder: "Enter the code sent to your email",
                                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                                            disabled: is_pending(),
                                        }
                                        p {
                                            class: "mt-1 text-xs text-gray-500",
                                            "Sent to {email}"
                                        }
                                    }
                                    div {
                                        class: "space-y-2",
                                        button {
                                            r#type: "submit",
                                            class: "w-full py-2.5 bg-red-600 text-white rounded-lg hover:bg-red-700 disabled:opacity-50",
                                            disabled: is_pending(),
                                            if is_pending() { "Verifying..." } else { "Verify & Sign In" }
                                        }
                                        button {
                                            r#type: "button",
                                            class: "w-full py-2.5 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200",
                                            onclick: move |_| {
                                                otp_step.set(OtpStep::Email);
                                                code.set(String::new());
                                                error.set(None);
                                            },
                                            "Back"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                p {
                    class: "mt-6 text-sm text-gray-600 text-center",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, class: "text-red-600 hover:text-red-700", "Sign up" }
                }
            }
        }
    }
}
