use super::*;

// =============================================================
// Bearer precedence
// =============================================================

#[test]
fn bearer_prefers_token_over_api_key() {
    let creds = Credentials {
        token: "tok-1".to_owned(),
        api_key: "key-1".to_owned(),
    };
    assert_eq!(creds.bearer(), Some("tok-1"));
}

#[test]
fn bearer_falls_back_to_api_key_when_token_empty() {
    let creds = Credentials {
        token: String::new(),
        api_key: "key-1".to_owned(),
    };
    assert_eq!(creds.bearer(), Some("key-1"));
}

#[test]
fn bearer_absent_when_both_empty() {
    assert_eq!(Credentials::default().bearer(), None);
}

// =============================================================
// Off-browser degradation
// =============================================================

#[test]
fn load_degrades_to_empty_without_storage() {
    // Native test builds have no localStorage; reads must come back empty
    // rather than erroring.
    let creds = load();
    assert_eq!(creds, Credentials::default());
}

#[test]
fn writes_are_no_ops_without_storage() {
    store_token("tok");
    store_api_key("key");
    assert_eq!(load(), Credentials::default());
    clear_token();
    clear_api_key();
}
