//! Route-guard decision for protected admin views.
//!
//! The decision is a pure function of the session phase and the requested
//! location, so the web component and the tests share one source of truth.
//! Redirect targets are validated on the way back in: only same-site admin
//! paths are honored after login.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::AuthPhase;
use crate::types::{Role, UserProfile};

/// Login entry point.
pub const LOGIN_PATH: &str = "/admin/login";

/// Where a successful login lands when no destination was carried.
pub const DEFAULT_DESTINATION: &str = "/admin/dashboard";

/// Query parameter carrying the originally requested location.
pub const FROM_PARAM: &str = "from";

/// What a protected view should show right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state is not resolved yet.
    Loading,
    /// Anonymous visitor; go to this login URL.
    Redirect(String),
    /// Authenticated; render the protected content.
    Render,
}

/// Decide for a visit to `requested` (path plus query) in `phase`.
#[must_use]
pub fn decide(phase: AuthPhase, requested: &str) -> GuardDecision {
    match phase {
        AuthPhase::Uninitialized | AuthPhase::Loading => GuardDecision::Loading,
        AuthPhase::Anonymous => GuardDecision::Redirect(login_redirect_href(requested)),
        AuthPhase::Authenticated => GuardDecision::Render,
    }
}

/// `/admin/login?from=<encoded requested>`.
#[must_use]
pub fn login_redirect_href(requested: &str) -> String {
    if requested.is_empty() {
        return LOGIN_PATH.to_owned();
    }
    let encoded: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(FROM_PARAM, requested)
        .finish();
    format!("{LOGIN_PATH}?{encoded}")
}

/// Where to go once logged in, given the (already decoded) `from` value.
#[must_use]
pub fn post_login_destination(from: Option<&str>) -> String {
    from.map(str::trim)
        .filter(|path| is_admin_destination(path))
        .unwrap_or(DEFAULT_DESTINATION)
        .to_owned()
}

fn is_admin_destination(path: &str) -> bool {
    if path.starts_with("//") || path.contains('\\') {
        return false;
    }
    let bare = path.split(['?', '#']).next().unwrap_or_default().trim_end_matches('/');
    if bare == LOGIN_PATH {
        return false;
    }
    bare == "/admin" || bare.starts_with("/admin/")
}

/// Only super administrators see the administrators screen.
#[must_use]
pub fn can_manage_admins(user: &UserProfile) -> bool {
    user.role == Role::SuperAdmin
}
