//! Pure session core
//!
//! Holds the authenticated principal and optional profile, independent of any
//! UI framework so the lifecycle rules stay host-testable. Single-writer:
//! only the session context mutates this through the methods below.

use crate::types::{Role, User, UserProfile};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub profile: Option<UserProfile>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authority(&self) -> bool {
        self.role() == Some(Role::Authority)
    }

    pub fn is_user(&self) -> bool {
        self.role() == Some(Role::User)
    }

    /// Name to show in the navbar and on SOS confirmation.
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        Some(
            user.full_name
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(&user.username)
                .to_string(),
        )
    }

    /// Emergency contact phone from the profile, when configured.
    pub fn emergency_phone(&self) -> Option<String> {
        self.profile
            .as_ref()
            .and_then(|p| p.emergency_contact_phone.clone())
            .filter(|p| !p.trim().is_empty())
    }

    pub fn apply_login(&mut self, user: User, profile: Option<UserProfile>) {
        self.user = Some(user);
        self.profile = profile;
    }

    /// Fail-closed: a stale or invalid token must never present as
    /// authenticated, so any identity-refresh failure clears everything.
    pub fn apply_refresh_failure(&mut self) {
        self.clear();
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.profile = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: 1,
            username: "asha".to_string(),
            email: Some("asha@example.com".to_string()),
            full_name: Some("Asha Rao".to_string()),
            contact_no: Some("9876543210".to_string()),
            role,
        }
    }

    #[test]
    fn anonymous_by_default() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.role(), None);
    }

    #[test]
    fn login_sets_principal_and_role() {
        let mut state = SessionState::default();
        state.apply_login(user(Role::Authority), None);
        assert!(state.is_authenticated());
        assert!(state.is_authority());
        assert!(!state.is_user());
    }

    #[test]
    fn refresh_failure_fails_closed() {
        let mut state = SessionState::default();
        state.apply_login(user(Role::User), Some(UserProfile::default()));
        state.apply_refresh_failure();
        assert!(!state.is_authenticated());
        assert!(state.profile.is_none());
    }

    #[test]
    fn display_name_prefers_full_name() {
        let mut state = SessionState::default();
        state.apply_login(user(Role::User), None);
        assert_eq!(state.display_name().as_deref(), Some("Asha Rao"));

        let mut bare = user(Role::User);
        bare.full_name = Some("   ".to_string());
        state.apply_login(bare, None);
        assert_eq!(state.display_name().as_deref(), Some("asha"));
    }

    #[test]
    fn blank_emergency_phone_is_ignored() {
        let mut state = SessionState::default();
        let profile = UserProfile {
            emergency_contact_phone: Some("  ".to_string()),
            ..UserProfile::default()
        };
        state.apply_login(user(Role::User), Some(profile));
        assert_eq!(state.emergency_phone(), None);
    }
}
