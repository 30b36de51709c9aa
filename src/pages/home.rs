//! Landing page

use dioxus::prelude::*;

use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn Home() -> Element {
    let session = use_session();

    rsx! {
        div {
            class: "max-w-4xl mx-auto px-4 py-16",

            div {
                class: "text-center mb-12",
                div { class: "text-6xl mb-4", "\u{1F6E1}" }
                h1 {
                    class: "text-4xl font-bold text-gray-900 mb-3",
                    "SafeTrip"
                }
                p {
                    class: "text-lg text-gray-600 max-w-xl mx-auto",
                    "One tap sends your live location to emergency responders. No account needed."
                }
                div {
                    class: "mt-8 flex flex-wrap gap-3 justify-center",
                    Link {
                        to: Route::Sos {},
                        class: "px-8 py-3 bg-red-600 text-white rounded-lg hover:bg-red-700 font-semibold text-lg",
                        "\u{1F6A8} Send SOS"
                    }
                    if !session.is_authenticated() {
                        Link {
                            to: Route::Signup {},
                            class: "px-8 py-3 bg-white border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 font-semibold text-lg",
                            "Create Account"
                        }
                    }
                }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                FeatureCard {
                    icon: "\u{1F4CD}",
                    title: "Live Location",
                    body: "Every alert carries a fresh GPS fix so responders see exactly where you are.",
                }
                FeatureCard {
                    icon: "\u{1F464}",
                    title: "Works Without Login",
                    body: "Anyone can send an alert. Sign in and your profile fills the form for you.",
                }
                FeatureCard {
                    icon: "\u{1F4DE}",
                    title: "Emergency Contacts",
                    body: "Store an emergency contact and it rides along with every alert you send.",
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeatureCardProps {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 text-center",
            div { class: "text-3xl mb-3", "{props.icon}" }
            h3 { class: "font-semibold text-gray-900 mb-2", "{props.title}" }
            p { class: "text-sm text-gray-600", "{props.body}" }
        }
    }
}
