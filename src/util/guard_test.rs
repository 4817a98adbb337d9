use super::*;

// =============================================================
// Static route table
// =============================================================

#[test]
fn admin_routes_require_auth() {
    assert!(route_requires_auth("/admin"));
    assert!(route_requires_auth("/admin/dashboard"));
    assert!(route_requires_auth("/admin/api-keys"));
    assert!(route_requires_auth("/admin/profile"));
}

#[test]
fn login_and_public_routes_do_not_require_auth() {
    assert!(!route_requires_auth(LOGIN_PATH));
    assert!(!route_requires_auth("/"));
    assert!(!route_requires_auth("/test-runs/42"));
}

// =============================================================
// Decision matrix
// =============================================================

#[test]
fn protected_route_unauthenticated_redirects_to_login_with_return_path() {
    let decision = decide_for_path("/admin/dashboard", false);
    assert_eq!(
        decision,
        GuardDecision::RedirectToLogin {
            target: "/admin/login?redirect=%2Fadmin%2Fdashboard".to_owned(),
        }
    );
}

#[test]
fn protected_route_authenticated_allows() {
    assert_eq!(decide_for_path("/admin/dashboard", true), GuardDecision::Allow);
}

#[test]
fn login_route_authenticated_redirects_to_dashboard() {
    assert_eq!(decide_for_path(LOGIN_PATH, true), GuardDecision::RedirectToDashboard);
}

#[test]
fn login_route_unauthenticated_allows() {
    assert_eq!(decide_for_path(LOGIN_PATH, false), GuardDecision::Allow);
}

#[test]
fn public_route_allows_regardless_of_session() {
    assert_eq!(decide_for_path("/", false), GuardDecision::Allow);
    assert_eq!(decide_for_path("/", true), GuardDecision::Allow);
    assert_eq!(decide_for_path("/test-runs/7", false), GuardDecision::Allow);
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn login_redirect_target_encodes_intended_path() {
    assert_eq!(
        login_redirect_target("/admin/api-keys"),
        "/admin/login?redirect=%2Fadmin%2Fapi-keys"
    );
}

#[test]
fn post_login_target_uses_carried_redirect() {
    assert_eq!(post_login_target(Some("/admin/profile".to_owned())), "/admin/profile");
}

#[test]
fn post_login_target_defaults_to_dashboard() {
    assert_eq!(post_login_target(None), DASHBOARD_PATH);
    assert_eq!(post_login_target(Some(String::new())), DASHBOARD_PATH);
}
