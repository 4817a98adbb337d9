//! Route guarding for the admin subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin page applies the same pre-navigation decision: send
//! unauthenticated visitors to the login page (remembering where they were
//! headed), and bounce already-authenticated visitors off the login page.
//! The decision itself is pure: it reads session state passed in and
//! never touches storage or the network. Redirects go through the
//! injected navigate closure, unlike the request pipeline's hard 401
//! redirect which bypasses the router on purpose.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// The login route, the only public page under `/admin`.
pub const LOGIN_PATH: &str = "/admin/login";

/// Default landing route for authenticated users.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Outcome of the pre-navigation check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Not authenticated on a protected route; `target` carries the
    /// intended path in its `redirect` query parameter.
    RedirectToLogin { target: String },
    /// Already authenticated on the login route.
    RedirectToDashboard,
}

/// Whether `path` sits in the auth-gated route surface.
///
/// The route table is static: everything under `/admin` except the login
/// page requires a session.
pub fn route_requires_auth(path: &str) -> bool {
    (path == "/admin" || path.starts_with("/admin/")) && path != LOGIN_PATH
}

/// Pure guard decision for a route transition.
pub fn decide(requires_auth: bool, authenticated: bool, path: &str) -> GuardDecision {
    if requires_auth && !authenticated {
        GuardDecision::RedirectToLogin {
            target: login_redirect_target(path),
        }
    } else if path == LOGIN_PATH && authenticated {
        GuardDecision::RedirectToDashboard
    } else {
        GuardDecision::Allow
    }
}

/// [`decide`] with `requires_auth` derived from the static route table.
pub fn decide_for_path(path: &str, authenticated: bool) -> GuardDecision {
    decide(route_requires_auth(path), authenticated, path)
}

/// Login URL carrying the originally intended path as a return target.
pub fn login_redirect_target(intended: &str) -> String {
    format!("{LOGIN_PATH}?redirect={}", urlencoding::encode(intended))
}

/// Where to land after a successful login: the `redirect` query value if
/// one was carried, the dashboard otherwise.
pub fn post_login_target(redirect: Option<String>) -> String {
    match redirect {
        Some(path) if !path.is_empty() => path,
        _ => DASHBOARD_PATH.to_owned(),
    }
}

/// Install the guard on a protected page: re-evaluates whenever session
/// state changes and redirects through the injected navigate closure.
pub fn install_admin_guard<F>(session: RwSignal<SessionState>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if let GuardDecision::RedirectToLogin { target } =
            decide_for_path(path, state.is_authenticated())
        {
            navigate(&target, NavigateOptions::default());
        }
    });
}

/// Install the login-page guard: authenticated visitors are sent to the
/// dashboard.
///
/// Evaluated once at page entry (untracked), not reactively. A login
/// completing on this page navigates to its carried return target itself
/// and must not be raced to the dashboard.
pub fn install_login_guard<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get_untracked();
        if decide_for_path(LOGIN_PATH, state.is_authenticated())
            == GuardDecision::RedirectToDashboard
        {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });
}
