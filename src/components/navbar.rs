//! Top navigation bar

use dioxus::prelude::*;

use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let snapshot = session.snapshot();

    let handle_logout = move |_| {
        let mut session = session;
        let navigator = navigator;
        spawn(async move {
            session.logout().await;
            navigator.push(Route::Home {});
        });
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 shadow-sm",
            div {
                class: "max-w-6xl mx-auto px-4 py-3 flex items-center justify-between",

                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold text-red-600",
                    "\u{1F6A8} SafeTrip"
                }

                div {
                    class: "flex items-center gap-4 text-sm",
                    Link { to: Route::Sos {}, class: "text-gray-700 hover:text-red-600", "SOS" }
                    Link { to: Route::SafetyTips {}, class: "text-gray-700 hover:text-red-600", "Safety Tips" }

                    if snapshot.is_authority() {
                        Link { to: Route::Dashboard {}, class: "text-gray-700 hover:text-red-600", "Dashboard" }
                    }

                    if snapshot.is_authenticated() {
                        Link { to: Route::Profile {}, class: "text-gray-700 hover:text-red-600", "Profile" }
                        span {
                            class: "text-gray-500 hidden sm:inline",
                            {snapshot.display_name().unwrap_or_default()}
                        }
                        button {
                            class: "px-3 py-1.5 bg-gray-100 text-gray-700 rounded hover:bg-gray-200",
                            onclick: handle_logout,
                            "Log out"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "px-3 py-1.5 bg-red-600 text-white rounded hover:bg-red-700",
                            "Log in"
                        }
                    }
                }
            }
        }
    }
}
