//! Profile page - view and edit the signed-in user's details
//!
//! The form seeds from the session snapshot once loading finishes and sends
//! only the fields the user can edit, as multipart so an image can ride along.

use dioxus::prelude::*;
use std::collections::HashMap;

use crate::api::auth::{ImageUpload, ProfileUpdate};
use crate::api::ApiError;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::session::use_session;
use crate::validation::{validate_name, validate_phone};

const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    let mut full_name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut emergency_name = use_signal(String::new);
    let mut emergency_phone = use_signal(String::new);
    let mut blood_group = use_signal(String::new);
    let mut pending_image = use_signal(|| None::<ImageUpload>);
    let mut seeded = use_signal(|| false);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error = use_signal(|| None::<String>);
    let mut saved = use_signal(|| false);
    let mut is_saving = use_signal(|| false);

    // Seed the form once the initial identity refresh lands
    use_effect(move || {
        if session.is_loading() || *seeded.peek() {
            return;
        }
        let snapshot = session.snapshot();
        if let Some(user) = &snapshot.user {
            full_name.set(user.full_name.clone().unwrap_or_default());
            phone.set(user.contact_no.clone().unwrap_or_default());
        }
        if let Some(profile) = &snapshot.profile {
            emergency_name.set(profile.emergency_contact_name.clone().unwrap_or_default());
            emergency_phone.set(profile.emergency_contact_phone.clone().unwrap_or_default());
            blood_group.set(profile.blood_group.clone().unwrap_or_default());
        }
        seeded.set(true);
    });

    // Anonymous visitors get sent to login once identity is known
    use_effect(move || {
        if !session.is_loading() && !session.is_authenticated() {
            navigator.replace(Route::Login {});
        }
    });
    if session.is_loading() || !session.is_authenticated() {
        return rsx! { LoadingSpinner {} };
    }

    let snapshot = session.snapshot();
    let username = snapshot
        .user
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();
    let email = snapshot
        .user
        .as_ref()
        .and_then(|u| u.email.clone())
        .unwrap_or_default();
    let image_url = snapshot.profile.as_ref().and_then(|p| p.image.clone());

    let handle_image_change = move |e: FormEvent| {
        let Some(engine) = e.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            match engine.read_file(&name).await {
                Some(bytes) => pending_image.set(Some(ImageUpload {
                    file_name: name,
                    bytes,
                })),
                None => error.set(Some("Could not read the selected image".to_string())),
            }
        });
    };

    let handle_submit = move |_| {
        let mut errors = HashMap::new();
        if let Some(e) = validate_name(&full_name()) {
            errors.insert("full_name".to_string(), e.to_string());
        }
        if let Some(e) = validate_phone(&phone()) {
            errors.insert("phone".to_string(), e.to_string());
        }
        // Emergency contact is optional but must be coherent when given
        if !emergency_phone().trim().is_empty() {
            if let Some(e) = validate_phone(&emergency_phone()) {
                errors.insert("emergency_contact_phone".to_string(), e.to_string());
            }
        }
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(HashMap::new());

        let non_empty = |s: String| {
            let trimmed = s.trim().to_string();
            (!trimmed.is_empty()).then_some(trimmed)
        };
        let update = ProfileUpdate {
            full_name: non_empty(full_name()),
            phone: non_empty(phone()),
            emergency_contact_name: non_empty(emergency_name()),
            emergency_contact_phone: non_empty(emergency_phone()),
            blood_group: non_empty(blood_group()),
            image: pending_image.peek().clone(),
        };

        let mut session = session;
        spawn(async move {
            is_saving.set(true);
            error.set(None);
            saved.set(false);

            match session.update_profile(update).await {
                Ok(()) => {
                    pending_image.set(None);
                    saved.set(true);
                }
                Err(ApiError::Validation { fields }) => field_errors.set(fields),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_saving.set(false);
        });
    };

    rsx! {
        div {
            class: "max-w-2xl mx-auto px-4 py-8",

            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "My Profile" }

            if saved() {
                div {
                    class: "mb-4 p-3 bg-green-50 border border-green-200 text-green-700 rounded text-sm",
                    "Profile updated successfully"
                }
            }
            if let Some(e) = error() {
                div {
                    class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm",
                    "{e}"
                }
            }

            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-6",
                div {
                    class: "flex items-center gap-4",
                    if let Some(url) = image_url {
                        img {
                            src: "{url}",
                            alt: "Profile photo",
                            class: "w-16 h-16 rounded-full object-cover border border-gray-200",
                        }
                    } else {
                        div {
                            class: "w-16 h-16 rounded-full bg-gray-100 flex items-center justify-center text-2xl",
                            "\u{1F464}"
                        }
                    }
                    div {
                        p { class: "font-semibold text-gray-900", "{username}" }
                        p { class: "text-sm text-gray-500", "{email}" }
                    }
                }
            }

            form {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                onsubmit: handle_submit,

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Full Name" }
                        input {
                            r#type: "text",
                            value: "{full_name}",
                            oninput: move |e| {
                                full_name.set(e.value());
                                field_errors.with_mut(|errs| { errs.remove("full_name"); });
                            },
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                        }
                        if let Some(e) = field_errors.read().get("full_name") {
                            p { class: "mt-1 text-xs text-red-600", "{e}" }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Phone Number" }
                        input {
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |e| {
                                phone.set(e.value());
                                field_errors.with_mut(|errs| { errs.remove("phone"); });
                            },
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                        }
                        if let Some(e) = field_errors.read().get("phone") {
                            p { class: "mt-1 text-xs text-red-600", "{e}" }
                        }
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Emergency Contact Name" }
                        input {
                            r#type: "text",
                            value: "{emergency_name}",
                            oninput: move |e| emergency_name.set(e.value()),
                            placeholder: "Who should we notify?",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Emergency Contact Phone" }
                        input {
                            r#type: "tel",
                            value: "{emergency_phone}",
                            oninput: move |e| {
                                emergency_phone.set(e.value());
                                field_errors.with_mut(|errs| { errs.remove("emergency_contact_phone"); });
                            },
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                        }
                        if let Some(e) = field_errors.read().get("emergency_contact_phone") {
                            p { class: "mt-1 text-xs text-red-600", "{e}" }
                        }
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Blood Group" }
                        select {
                            value: "{blood_group}",
                            onchange: move |e| blood_group.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500",
                            option { value: "", "Not set" }
                            for group in BLOOD_GROUPS {
                                option { value: *group, "{group}" }
                            }
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Profile Photo" }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            onchange: handle_image_change,
                            class: "w-full text-sm text-gray-600",
                        }
                        if let Some(image) = pending_image.read().as_ref() {
                            p { class: "mt-1 text-xs text-gray-500", "Selected: {image.file_name}" }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: "w-full py-2.5 bg-red-600 text-white rounded-lg hover:bg-red-700 disabled:opacity-50",
                    disabled: is_saving(),
                    if is_saving() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}
