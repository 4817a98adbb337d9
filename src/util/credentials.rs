//! Browser localStorage persistence for authorization material.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token and the CI upload API key live under two independent
//! localStorage keys so either can be cleared without touching the other.
//! The request pipeline reads both once per outbound call; the session
//! controller writes the token on login and clears it on logout.
//!
//! Storage unavailability is never an error: reads degrade to empty
//! strings (unauthenticated) and writes become no-ops.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

/// localStorage key holding the admin session token.
pub const TOKEN_KEY: &str = "admin_token";

/// localStorage key holding the CI upload API key.
pub const API_KEY_KEY: &str = "api_key";

/// Snapshot of both persisted credential values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub api_key: String,
}

impl Credentials {
    /// The value to place in the `Authorization: Bearer` header.
    ///
    /// A non-empty session token always wins over the API key; an expired
    /// token never falls back to the API key within a single request.
    pub fn bearer(&self) -> Option<&str> {
        if !self.token.is_empty() {
            Some(&self.token)
        } else if !self.api_key.is_empty() {
            Some(&self.api_key)
        } else {
            None
        }
    }
}

/// Read both persisted values. Missing keys map to empty strings.
pub fn load() -> Credentials {
    Credentials {
        token: read_item(TOKEN_KEY),
        api_key: read_item(API_KEY_KEY),
    }
}

/// Persist the session token.
pub fn store_token(value: &str) {
    write_item(TOKEN_KEY, value);
}

/// Delete the persisted session token.
pub fn clear_token() {
    remove_item(TOKEN_KEY);
}

/// Persist the CI upload API key.
pub fn store_api_key(value: &str) {
    write_item(API_KEY_KEY, value);
}

/// Delete the persisted API key.
pub fn clear_api_key() {
    remove_item(API_KEY_KEY);
}

fn read_item(key: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        String::new()
    }
}

fn write_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
