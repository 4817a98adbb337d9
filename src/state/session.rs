//! Admin session state and its operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module is the single authority for "who is logged in". Route
//! guards read [`SessionState::is_authenticated`]; the login/logout
//! operations keep the in-memory token and the persisted credential store
//! in step. The API-key cache mirrors the last successful list response:
//! every mutation re-fetches instead of patching locally.
//!
//! Operations are independently re-entrant. `loading` is an advisory busy
//! flag for the UI, not a lock: two overlapping logins both run to
//! completion and the last credential write wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{ApiKey, NewApiKey, PasswordChange, Profile};
use crate::state::toast::Toasts;
use crate::util::credentials;

/// In-memory session state, provided as `RwSignal<SessionState>` context.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<Profile>,
    /// Mirrors the credential store's token for reactive consumption.
    pub token: String,
    pub loading: bool,
    /// Cache of the last successful API-key list response.
    pub api_keys: Vec<ApiKey>,
}

impl SessionState {
    /// Initial state on app start: token seeded from the credential store,
    /// profile not yet fetched.
    pub fn restored() -> Self {
        Self {
            token: credentials::load().token,
            ..Self::default()
        }
    }

    /// True iff the in-memory token is non-empty.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Adopt a successful login payload: token plus the initial profile
    /// value (replaced by the full profile fetch that follows).
    pub fn apply_login(&mut self, token: String, user: Profile) {
        self.token = token;
        self.user = Some(user);
    }

    /// Replace the profile wholesale; never a partial merge.
    pub fn apply_profile(&mut self, profile: Profile) {
        self.user = Some(profile);
    }

    /// Replace the API-key cache with a full server response.
    pub fn apply_api_keys(&mut self, keys: Vec<ApiKey>) {
        self.api_keys = keys;
    }

    /// Drop all session identity.
    pub fn reset(&mut self) {
        self.user = None;
        self.token.clear();
        self.api_keys.clear();
    }
}

/// Log in and establish the session.
///
/// On success the token is persisted and memorized, the login payload's
/// profile is adopted as an initial value, then the full profile is
/// re-fetched. Returns false on any failure, leaving the session
/// unauthenticated.
pub async fn login(
    session: RwSignal<SessionState>,
    toasts: Toasts,
    username: &str,
    password: &str,
) -> bool {
    session.update(|s| s.loading = true);
    let outcome = match api::admin_login(toasts, username, password).await {
        Ok(login) => {
            credentials::store_token(&login.token);
            session.update(|s| s.apply_login(login.token, login.user));
            let _ = fetch_profile(session).await;
            toasts.success("Signed in");
            true
        }
        Err(_) => {
            toasts.error("Sign-in failed");
            false
        }
    };
    session.update(|s| s.loading = false);
    outcome
}

/// Drop the session: in-memory token and user, plus the persisted token.
/// No network call; cannot fail.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(SessionState::reset);
    credentials::clear_token();
}

/// Fetch the profile and replace `user` wholesale. Failures are logged by
/// the pipeline, never toasted; this runs as a background refresh.
pub async fn fetch_profile(session: RwSignal<SessionState>) -> Option<Profile> {
    session.update(|s| s.loading = true);
    let profile = match api::profile().await {
        Ok(profile) => {
            session.update(|s| s.apply_profile(profile.clone()));
            Some(profile)
        }
        Err(_) => None,
    };
    session.update(|s| s.loading = false);
    profile
}

/// Change the account password. Field validation is server-side; session
/// state is otherwise untouched.
pub async fn change_password(
    session: RwSignal<SessionState>,
    toasts: Toasts,
    old_password: &str,
    new_password: &str,
    confirm_password: &str,
) -> bool {
    session.update(|s| s.loading = true);
    let change = PasswordChange {
        old_password: old_password.to_owned(),
        new_password: new_password.to_owned(),
        confirm_password: confirm_password.to_owned(),
    };
    let outcome = match api::update_password(toasts, &change).await {
        Ok(()) => {
            toasts.success("Password updated");
            true
        }
        Err(_) => {
            toasts.error("Password update failed");
            false
        }
    };
    session.update(|s| s.loading = false);
    outcome
}

/// Refresh the API-key cache from the server.
pub async fn fetch_api_keys(session: RwSignal<SessionState>) {
    session.update(|s| s.loading = true);
    if let Ok(keys) = api::api_keys().await {
        session.update(|s| s.apply_api_keys(keys));
    }
    session.update(|s| s.loading = false);
}

/// Create an API key. The cache is refreshed from the server afterwards
/// rather than patched with the local object; the returned key is the
/// only place the secret value is visible unmasked.
pub async fn create_key(
    session: RwSignal<SessionState>,
    toasts: Toasts,
    name: &str,
    description: Option<String>,
    expires_at: Option<String>,
) -> Option<ApiKey> {
    session.update(|s| s.loading = true);
    let payload = NewApiKey {
        name: name.to_owned(),
        description,
        expires_at,
    };
    let created = match api::create_api_key(toasts, &payload).await {
        Ok(key) => {
            toasts.success("API key created");
            fetch_api_keys(session).await;
            Some(key)
        }
        Err(_) => {
            toasts.error("Failed to create API key");
            None
        }
    };
    session.update(|s| s.loading = false);
    created
}

/// Delete an API key, then refresh the cache from the server.
pub async fn remove_key(session: RwSignal<SessionState>, toasts: Toasts, id: &str) {
    session.update(|s| s.loading = true);
    match api::delete_api_key(toasts, id).await {
        Ok(()) => {
            toasts.success("API key deleted");
            fetch_api_keys(session).await;
        }
        Err(_) => toasts.error("Failed to delete API key"),
    }
    session.update(|s| s.loading = false);
}
