use super::*;
use crate::net::types::Envelope;

// =============================================================
// Status classification
// =============================================================

#[test]
fn classify_401_is_unauthorized() {
    assert_eq!(classify_status(401, None), ApiError::Unauthorized);
}

#[test]
fn classify_fixed_statuses() {
    assert_eq!(classify_status(403, None), ApiError::Forbidden);
    assert_eq!(classify_status(404, None), ApiError::NotFound);
    assert_eq!(classify_status(500, None), ApiError::ServerError);
}

#[test]
fn classify_other_status_prefers_server_message() {
    assert_eq!(
        classify_status(422, Some("validation failed".to_owned())),
        ApiError::Http {
            status: 422,
            message: "validation failed".to_owned(),
        }
    );
}

#[test]
fn classify_other_status_derives_message_from_status() {
    assert_eq!(
        classify_status(502, None),
        ApiError::Http {
            status: 502,
            message: "Request failed: 502".to_owned(),
        }
    );
}

#[test]
fn fixed_statuses_ignore_server_message() {
    // 401/403/404/500 carry their own derived messages.
    assert_eq!(
        classify_status(401, Some("token expired".to_owned())),
        ApiError::Unauthorized
    );
}

// =============================================================
// Envelope unwrapping
// =============================================================

#[test]
fn unwrap_success_yields_payload() {
    let envelope = Envelope {
        code: 200,
        message: "success".to_owned(),
        data: Some(7_i64),
    };
    assert_eq!(unwrap_envelope(envelope), Ok(Some(7)));
}

#[test]
fn unwrap_success_without_data_yields_none() {
    let envelope: Envelope<i64> = Envelope {
        code: 200,
        message: "success".to_owned(),
        data: None,
    };
    assert_eq!(unwrap_envelope(envelope), Ok(None));
}

#[test]
fn unwrap_non_success_code_is_logical_failure() {
    let envelope: Envelope<i64> = Envelope {
        code: 1001,
        message: "invalid credentials".to_owned(),
        data: None,
    };
    assert_eq!(
        unwrap_envelope(envelope),
        Err(ApiError::Api {
            code: 1001,
            message: "invalid credentials".to_owned(),
        })
    );
}

#[test]
fn unwrap_non_success_code_falls_back_to_generic_message() {
    let envelope: Envelope<i64> = Envelope {
        code: 500,
        message: String::new(),
        data: None,
    };
    assert_eq!(
        unwrap_envelope(envelope),
        Err(ApiError::Api {
            code: 500,
            message: GENERIC_FAILURE.to_owned(),
        })
    );
}

#[test]
fn logical_failure_ignores_payload() {
    let envelope = Envelope {
        code: 400,
        message: "bad".to_owned(),
        data: Some("ignored".to_owned()),
    };
    assert!(unwrap_envelope(envelope).is_err());
}

#[test]
fn require_data_rejects_missing_payload() {
    assert_eq!(require_data::<i64>(None), Err(ApiError::Network));
    assert_eq!(require_data(Some(1)), Ok(1));
}

// =============================================================
// 401 redirect decision
// =============================================================

#[test]
fn redirect_needed_away_from_login() {
    assert!(login_redirect_needed("/admin/dashboard"));
    assert!(login_redirect_needed("/"));
}

#[test]
fn no_redirect_when_already_on_login() {
    assert!(!login_redirect_needed("/admin/login"));
}

// =============================================================
// URL joining and messages
// =============================================================

#[test]
fn api_url_joins_base_and_path() {
    let url = api_url("/test-runs");
    assert!(url.starts_with(BASE_URL));
    assert!(url.ends_with("/test-runs"));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        ApiError::Unauthorized.to_string(),
        "Unauthorized, please sign in again"
    );
    assert_eq!(ApiError::Forbidden.to_string(), "Access denied");
    assert_eq!(
        ApiError::NotFound.to_string(),
        "The requested resource does not exist"
    );
    assert_eq!(ApiError::ServerError.to_string(), "Internal server error");
    assert_eq!(
        ApiError::Network.to_string(),
        "Network error, please check your connection"
    );
    assert_eq!(
        ApiError::Api {
            code: 1001,
            message: "invalid credentials".to_owned(),
        }
        .to_string(),
        "invalid credentials"
    );
}
