//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthGuard` renders one `GuardView` and, when the visitor has no session,
//! fires one login redirect. Both decisions live here as plain functions so
//! the component is a thin dispatch over them.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::AuthConfig;
use crate::state::session::{SessionProvider, SessionStatus};
use crate::util::storage::{LOGIN_ROLE_KEY, RETURN_URL_KEY, TabStorage};

/// What the guard renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    /// Login redirect in flight; renders nothing.
    Redirecting,
    /// Authenticated with the wrong role; carries the required role.
    Denied(String),
    Authorized,
}

/// A login redirect the guard wants to start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRequest {
    /// Path + query to come back to after the callback.
    pub return_url: String,
    /// Role to log in with; `None` means generic login.
    pub role: Option<String>,
}

/// Pick the view for the current session and location.
pub fn decide(status: &SessionStatus, required_role: Option<&str>, pathname: &str, callback_path: &str) -> GuardView {
    if pathname == callback_path {
        return GuardView::Authorized;
    }
    match status {
        SessionStatus::Loading => GuardView::Loading,
        SessionStatus::Unauthenticated => GuardView::Redirecting,
        SessionStatus::Authenticated { role } => match required_role {
            Some(required) if role.as_deref() != Some(required) => GuardView::Denied(required.to_owned()),
            _ => GuardView::Authorized,
        },
    }
}

/// Join a pathname and a search string into the stored return URL.
pub fn location_key(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{query}")
    }
}

/// The login redirect to start, if any.
pub fn login_request(
    status: &SessionStatus,
    required_role: Option<&str>,
    pathname: &str,
    search: &str,
    config: &AuthConfig,
) -> Option<LoginRequest> {
    if pathname == config.callback_path || !matches!(status, SessionStatus::Unauthenticated) {
        return None;
    }
    let role = required_role.or_else(|| config.unscoped_role()).map(str::to_owned);
    Some(LoginRequest { return_url: location_key(pathname, search), role })
}

/// Remembers which location already triggered a redirect, so re-running the
/// guard effect with unchanged inputs does not redirect twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    fired_for: Option<String>,
}

impl RedirectLatch {
    /// Feed the current request. Returns `true` when the redirect should fire.
    /// A `None` request (session loading or present) re-arms the latch.
    pub fn observe(&mut self, request: Option<&LoginRequest>) -> bool {
        let Some(request) = request else {
            self.fired_for = None;
            return false;
        };
        if self.fired_for.as_deref() == Some(request.return_url.as_str()) {
            return false;
        }
        self.fired_for = Some(request.return_url.clone());
        true
    }
}

/// Persist the return path and hand off to the session provider's login.
pub fn start_login<P, S>(provider: &P, storage: &S, request: &LoginRequest)
where
    P: SessionProvider,
    S: TabStorage,
{
    storage.set(RETURN_URL_KEY, &request.return_url);
    match &request.role {
        Some(role) => {
            storage.set(LOGIN_ROLE_KEY, role);
            provider.login_with_role(role);
        }
        None => {
            storage.remove(LOGIN_ROLE_KEY);
            provider.login();
        }
    }
}
