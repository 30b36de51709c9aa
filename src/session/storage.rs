//! Durable client state
//!
//! Local storage holds the session token and a denormalized copy of the
//! last-known user, so a reload shows identity immediately while the refresh
//! call is still in flight.

use gloo_storage::{LocalStorage, Storage};

use crate::types::User;

const TOKEN_KEY: &str = "safetrip_token";
const USER_KEY: &str = "safetrip_user";

pub fn load_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

pub fn store_token(token: &str) {
    if let Err(e) = LocalStorage::set(TOKEN_KEY, token) {
        tracing::warn!(?e, "failed to persist session token");
    }
}

pub fn load_cached_user() -> Option<User> {
    LocalStorage::get(USER_KEY).ok()
}

pub fn store_cached_user(user: &User) {
    if let Err(e) = LocalStorage::set(USER_KEY, user) {
        tracing::warn!(?e, "failed to cache user");
    }
}

/// Drop everything. Used on logout and on identity-refresh failure.
pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}
