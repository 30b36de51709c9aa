//! Static safety tips page

use dioxus::prelude::*;

const TIPS: &[(&str, &str, &str)] = &[
    (
        "\u{1F4F1}",
        "Share your itinerary",
        "Let a trusted contact know where you are going and when you expect to arrive.",
    ),
    (
        "\u{1F50B}",
        "Keep your phone charged",
        "Carry a power bank on long trips. A dead battery means no location fix.",
    ),
    (
        "\u{1F4CD}",
        "Enable location services",
        "SOS alerts need GPS. Turn location on before you need it, not after.",
    ),
    (
        "\u{1F6B6}",
        "Stay in well-lit areas",
        "Prefer busy, well-lit routes at night even when a shortcut looks tempting.",
    ),
    (
        "\u{1F691}",
        "Know the local helplines",
        "Police 100, Ambulance 108, Women Helpline 181. Save them before travelling.",
    ),
    (
        "\u{1FA79}",
        "Carry basic first aid",
        "A small kit and your blood group noted in your profile can save minutes.",
    ),
];

#[component]
pub fn SafetyTips() -> Element {
    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 py-8",

            div {
                class: "text-center mb-8",
                h1 { class: "text-2xl font-bold text-gray-900", "Safety Tips" }
                p { class: "text-gray-600", "Simple habits that make emergencies survivable" }
            }

            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                for (icon, title, body) in TIPS {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-5",
                        div { class: "text-2xl mb-2", "{icon}" }
                        h3 { class: "font-semibold text-gray-900 mb-1", "{title}" }
                        p { class: "text-sm text-gray-600", "{body}" }
                    }
                }
            }
        }
    }
}
