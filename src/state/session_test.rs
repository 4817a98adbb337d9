use super::*;

fn profile(id: &str, username: &str) -> Profile {
    Profile {
        id: id.to_owned(),
        username: username.to_owned(),
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

fn api_key(id: &str, name: &str) -> ApiKey {
    ApiKey {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        key: "dragonos_masked".to_owned(),
        expires_at: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

// =============================================================
// Authentication flag
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn authenticated_iff_token_non_empty() {
    let mut state = SessionState::default();
    assert!(!state.is_authenticated());
    state.token = "jwt-abc".to_owned();
    assert!(state.is_authenticated());
    state.token.clear();
    assert!(!state.is_authenticated());
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn apply_login_sets_token_and_initial_user() {
    let mut state = SessionState::default();
    state.apply_login("jwt-abc".to_owned(), profile("1", "admin"));
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("admin"));
}

#[test]
fn reset_clears_all_identity() {
    let mut state = SessionState::default();
    state.apply_login("jwt-abc".to_owned(), profile("1", "admin"));
    state.apply_api_keys(vec![api_key("k1", "uploader")]);
    state.reset();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.api_keys.is_empty());
}

// =============================================================
// Profile replacement
// =============================================================

#[test]
fn apply_profile_replaces_wholesale() {
    let mut state = SessionState::default();
    state.apply_login("jwt-abc".to_owned(), profile("1", "initial"));
    state.apply_profile(profile("1", "refreshed"));
    let user = state.user.expect("profile present");
    assert_eq!(user.username, "refreshed");
}

// =============================================================
// API-key cache mirror
// =============================================================

#[test]
fn api_key_cache_mirrors_last_list_response() {
    let mut state = SessionState::default();
    state.apply_api_keys(vec![api_key("k1", "one"), api_key("k2", "two")]);
    // A later response replaces the cache entirely, including removals
    // the client never performed itself.
    state.apply_api_keys(vec![api_key("k3", "three")]);
    assert_eq!(state.api_keys.len(), 1);
    assert_eq!(state.api_keys[0].id, "k3");
}
