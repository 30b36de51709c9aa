//! SOS submission flow core
//!
//! The phase machine and the pure pieces of the submission pipeline:
//! form validation, role-dependent payload composition, and the guard that
//! keeps one user action from ever racing a second create call.

use std::collections::HashMap;

use crate::api::alerts::AlertPayload;
use crate::geo::Fix;
use crate::session::SessionState;
use crate::validation::{validate_name, validate_phone};

pub const SOS_MESSAGE: &str = "Emergency SOS Alert - Immediate assistance needed!";

/// How long the siren cue plays, and how long the success state is shown
/// before navigating to the dashboard.
pub const SIREN_MS: u32 = 3_000;
pub const SUCCESS_REDIRECT_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Locating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    /// Whether a new submit action may start. False while a submission is in
    /// flight, which is what enforces at-most-one create call per action.
    pub fn accepts_submit(self) -> bool {
        matches!(
            self,
            SubmitPhase::Idle | SubmitPhase::Succeeded | SubmitPhase::Failed
        )
    }

    pub fn in_flight(self) -> bool {
        matches!(
            self,
            SubmitPhase::Validating | SubmitPhase::Locating | SubmitPhase::Submitting
        )
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmitPhase::Locating => "Getting location...",
            SubmitPhase::Submitting => "Sending Alert...",
            _ => "\u{1F198} SEND SOS ALERT",
        }
    }
}

/// Anonymous identity fields. Preserved across failed attempts so the user
/// never re-enters them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SosForm {
    pub name: String,
    pub phone: String,
}

/// Validate the anonymous identity fields. Authenticated sessions skip this:
/// session state itself gates their identity.
pub fn validate_form(session: &SessionState, form: &SosForm) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if session.is_authenticated() {
        return errors;
    }
    if let Some(e) = validate_name(&form.name) {
        errors.insert("name".to_string(), e.to_string());
    }
    if let Some(e) = validate_phone(&form.phone) {
        errors.insert("phone".to_string(), e.to_string());
    }
    errors
}

/// Compose the role-dependent create payload from a session snapshot, the
/// form fields and a fresh fix.
pub fn compose_payload(session: &SessionState, form: &SosForm, fix: &Fix) -> AlertPayload {
    match &session.user {
        Some(user) => AlertPayload::Authenticated {
            user_id: user.id,
            emergency_contact_phone: session.emergency_phone(),
            latitude: fix.latitude,
            longitude: fix.longitude,
            message: Some(SOS_MESSAGE.to_string()),
        },
        None => AlertPayload::Anonymous {
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            latitude: fix.latitude,
            longitude: fix.longitude,
            message: Some(SOS_MESSAGE.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, User, UserProfile};

    fn fix() -> Fix {
        Fix {
            latitude: 12.9716,
            longitude: 77.5946,
            accuracy: 8.0,
            captured_at_ms: 1_714_550_000_000.0,
        }
    }

    fn authed_session(emergency_phone: Option<&str>) -> SessionState {
        let mut state = SessionState::default();
        state.apply_login(
            User {
                id: 42,
                username: "asha".to_string(),
                email: None,
                full_name: Some("Asha Rao".to_string()),
                contact_no: None,
                role: Role::User,
            },
            Some(UserProfile {
                emergency_contact_phone: emergency_phone.map(str::to_string),
                ..UserProfile::default()
            }),
        );
        state
    }

    #[test]
    fn in_flight_phases_reject_submit() {
        // the double-click window: LOCATING and SUBMITTING must refuse
        assert!(!SubmitPhase::Validating.accepts_submit());
        assert!(!SubmitPhase::Locating.accepts_submit());
        assert!(!SubmitPhase::Submitting.accepts_submit());
    }

    #[test]
    fn terminal_and_idle_phases_accept_submit() {
        assert!(SubmitPhase::Idle.accepts_submit());
        assert!(SubmitPhase::Failed.accepts_submit());
        assert!(SubmitPhase::Succeeded.accepts_submit());
    }

    #[test]
    fn second_trigger_during_locating_is_ignored() {
        // simulate the submit handler's gate for a double trigger
        let mut phase = SubmitPhase::Idle;
        let mut create_calls = 0;

        for _ in 0..2 {
            if !phase.accepts_submit() {
                continue;
            }
            phase = SubmitPhase::Locating;
            create_calls += 1;
        }

        assert_eq!(create_calls, 1);
        assert_eq!(phase, SubmitPhase::Locating);
    }

    #[test]
    fn anonymous_form_is_validated() {
        let session = SessionState::default();
        let errors = validate_form(
            &session,
            &SosForm {
                name: "A".to_string(),
                phone: "123".to_string(),
            },
        );
        assert_eq!(
            errors.get("name").map(String::as_str),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(
            errors.get("phone").map(String::as_str),
            Some("Phone number must be at least 10 digits")
        );
    }

    #[test]
    fn authenticated_sessions_skip_field_validation() {
        let errors = validate_form(&authed_session(None), &SosForm::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn anonymous_payload_carries_trimmed_identity() {
        let session = SessionState::default();
        let form = SosForm {
            name: "  Jane Doe ".to_string(),
            phone: " +91 9876543210 ".to_string(),
        };
        match compose_payload(&session, &form, &fix()) {
            AlertPayload::Anonymous {
                name,
                phone,
                latitude,
                message,
                ..
            } => {
                assert_eq!(name, "Jane Doe");
                assert_eq!(phone, "+91 9876543210");
                assert_eq!(latitude, 12.9716);
                assert_eq!(message.as_deref(), Some(SOS_MESSAGE));
            }
            other => panic!("expected anonymous payload, got {other:?}"),
        }
    }

    #[test]
    fn authenticated_payload_uses_session_identity() {
        let form = SosForm::default();
        match compose_payload(&authed_session(Some("9123456780")), &form, &fix()) {
            AlertPayload::Authenticated {
                user_id,
                emergency_contact_phone,
                ..
            } => {
                assert_eq!(user_id, 42);
                assert_eq!(emergency_contact_phone.as_deref(), Some("9123456780"));
            }
            other => panic!("expected authenticated payload, got {other:?}"),
        }
    }

    #[test]
    fn missing_emergency_contact_is_omitted() {
        match compose_payload(&authed_session(None), &SosForm::default(), &fix()) {
            AlertPayload::Authenticated {
                emergency_contact_phone,
                ..
            } => assert_eq!(emergency_contact_phone, None),
            other => panic!("expected authenticated payload, got {other:?}"),
        }
    }
}
