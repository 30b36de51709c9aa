//! Session context provider
//!
//! The one owner of session state. Views read snapshots through the context
//! and request mutations through its operations; nothing else writes the
//! store or the persisted token.

use dioxus::prelude::*;

use super::state::SessionState;
use super::storage;
use crate::api::{self, ApiError};
use crate::types::UserProfile;

/// Session context that provides identity state to the entire app.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: Signal<SessionState>,
    /// Whether the initial identity refresh is still pending.
    loading: Signal<bool>,
}

impl SessionContext {
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn is_authority(&self) -> bool {
        self.state.read().is_authority()
    }

    /// Identity refresh, attempted once at provider mount. Fail-closed: any
    /// failure clears the persisted token and leaves the session anonymous.
    pub async fn refresh(&mut self) {
        if storage::load_token().is_none() {
            storage::clear();
            self.state.set(SessionState::default());
            self.loading.set(false);
            return;
        }

        // Show the cached user while the refresh is pending
        if let Some(cached) = storage::load_cached_user() {
            self.state.with_mut(|s| s.apply_login(cached, None));
        }

        match api::auth::current_user().await {
            Ok(response) => {
                storage::store_cached_user(&response.user);
                self.state
                    .with_mut(|s| s.apply_login(response.user, response.profile));
            }
            Err(e) => {
                tracing::warn!(%e, "identity refresh failed, clearing session");
                storage::clear();
                self.state.with_mut(|s| s.apply_refresh_failure());
            }
        }
        self.loading.set(false);
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ApiError> {
        let response = api::auth::login(username, password).await?;
        storage::store_token(&response.token);
        storage::store_cached_user(&response.user);
        self.state
            .with_mut(|s| s.apply_login(response.user, response.profile));
        Ok(())
    }

    pub async fn verify_otp(&mut self, email: &str, code: &str) -> Result<(), ApiError> {
        let response = api::auth::verify_otp(email, code).await?;
        storage::store_token(&response.token);
        storage::store_cached_user(&response.user);
        self.state.with_mut(|s| s.apply_login(response.user, None));
        Ok(())
    }

    /// Local state wins: storage and signals clear even when the remote
    /// logout call errors.
    pub async fn logout(&mut self) {
        if let Err(e) = api::auth::logout().await {
            tracing::debug!(%e, "remote logout failed, clearing locally anyway");
        }
        storage::clear();
        self.state.set(SessionState::default());
    }

    pub async fn reload_profile(&mut self) {
        match api::auth::fetch_profile().await {
            Ok(response) => self.state.with_mut(|s| {
                if response.user.is_some() {
                    s.user = response.user;
                }
                if response.profile.is_some() {
                    s.profile = response.profile;
                }
            }),
            Err(e) => tracing::warn!(%e, "profile reload failed"),
        }
    }

    pub async fn update_profile(
        &mut self,
        update: api::auth::ProfileUpdate,
    ) -> Result<(), ApiError> {
        let response = api::auth::update_profile(update).await?;
        self.state.with_mut(|s| {
            if let Some(user) = response.user {
                storage::store_cached_user(&user);
                s.user = Some(user);
            }
            s.profile = response.profile.or_else(|| Some(UserProfile::default()));
        });
        Ok(())
    }
}

/// Session provider component that wraps the app.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(SessionState::default);
    let loading = use_signal(|| true);

    let session = SessionContext { state, loading };
    use_context_provider(|| session);

    // Load initial identity once
    use_effect(move || {
        let mut session = session;
        spawn(async move {
            session.refresh().await;
        });
    });

    children
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
