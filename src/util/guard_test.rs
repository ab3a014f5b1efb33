use std::cell::RefCell;

use super::*;
use crate::util::storage::MemoryStorage;

const CALLBACK: &str = "/callback";

fn authed(role: Option<&str>) -> SessionStatus {
    SessionStatus::Authenticated { role: role.map(str::to_owned) }
}

#[derive(Default)]
struct RecordingSession {
    calls: RefCell<Vec<String>>,
}

impl SessionProvider for RecordingSession {
    fn status(&self) -> SessionStatus {
        SessionStatus::Unauthenticated
    }

    fn login(&self) {
        self.calls.borrow_mut().push("login".to_owned());
    }

    fn login_with_role(&self, role: &str) {
        self.calls.borrow_mut().push(format!("login_with_role:{role}"));
    }

    async fn refresh_auth(&self) {}
}

// =============================================================
// decide
// =============================================================

#[test]
fn matching_role_renders_children() {
    assert_eq!(decide(&authed(Some("admin")), Some("admin"), "/admin", CALLBACK), GuardView::Authorized);
}

#[test]
fn no_required_role_renders_children_for_any_session() {
    assert_eq!(decide(&authed(Some("client")), None, "/", CALLBACK), GuardView::Authorized);
    assert_eq!(decide(&authed(None), None, "/", CALLBACK), GuardView::Authorized);
}

#[test]
fn mismatched_role_is_denied_with_required_role() {
    assert_eq!(
        decide(&authed(Some("client")), Some("admin"), "/admin", CALLBACK),
        GuardView::Denied("admin".to_owned())
    );
}

#[test]
fn missing_session_role_is_denied_when_role_required() {
    assert_eq!(decide(&authed(None), Some("admin"), "/admin", CALLBACK), GuardView::Denied("admin".to_owned()));
}

#[test]
fn loading_renders_placeholder() {
    assert_eq!(decide(&SessionStatus::Loading, Some("admin"), "/admin", CALLBACK), GuardView::Loading);
}

#[test]
fn unauthenticated_renders_nothing() {
    assert_eq!(decide(&SessionStatus::Unauthenticated, None, "/", CALLBACK), GuardView::Redirecting);
}

#[test]
fn callback_path_always_renders_children() {
    for status in [SessionStatus::Loading, SessionStatus::Unauthenticated, authed(Some("client"))] {
        assert_eq!(decide(&status, Some("admin"), CALLBACK, CALLBACK), GuardView::Authorized);
    }
}

#[test]
fn leaving_callback_after_login_keeps_children_mounted() {
    let status = authed(Some("client"));
    assert_eq!(decide(&status, None, CALLBACK, CALLBACK), GuardView::Authorized);
    assert_eq!(decide(&status, None, "/reports", CALLBACK), GuardView::Authorized);
}

// =============================================================
// location_key
// =============================================================

#[test]
fn location_key_joins_path_and_query() {
    assert_eq!(location_key("/reports", "?year=2024"), "/reports?year=2024");
    assert_eq!(location_key("/reports", "year=2024"), "/reports?year=2024");
    assert_eq!(location_key("/reports", ""), "/reports");
    assert_eq!(location_key("/reports", "?"), "/reports");
}

// =============================================================
// login_request
// =============================================================

#[test]
fn unauthenticated_requests_role_scoped_login() {
    let request = login_request(&SessionStatus::Unauthenticated, Some("admin"), "/admin", "?x=1", &AuthConfig::default());
    assert_eq!(
        request,
        Some(LoginRequest { return_url: "/admin?x=1".to_owned(), role: Some("admin".to_owned()) })
    );
}

#[test]
fn unauthenticated_without_role_requests_generic_login() {
    let request = login_request(&SessionStatus::Unauthenticated, None, "/", "", &AuthConfig::default());
    assert_eq!(request, Some(LoginRequest { return_url: "/".to_owned(), role: None }));
}

#[test]
fn wildcard_config_scopes_unscoped_login() {
    let config = AuthConfig::from_values(None, None, None, Some("*"));
    let request = login_request(&SessionStatus::Unauthenticated, None, "/", "", &config).unwrap();
    assert_eq!(request.role.as_deref(), Some("*"));
}

#[test]
fn no_login_while_loading_or_authenticated() {
    let config = AuthConfig::default();
    assert_eq!(login_request(&SessionStatus::Loading, None, "/", "", &config), None);
    assert_eq!(login_request(&authed(Some("client")), Some("admin"), "/admin", "", &config), None);
}

#[test]
fn no_login_on_callback_path() {
    let config = AuthConfig::default();
    assert_eq!(login_request(&SessionStatus::Unauthenticated, None, CALLBACK, "?code=abc", &config), None);
}

// =============================================================
// RedirectLatch
// =============================================================

fn request(path: &str) -> LoginRequest {
    LoginRequest { return_url: path.to_owned(), role: None }
}

#[test]
fn latch_fires_once_per_location() {
    let mut latch = RedirectLatch::default();
    assert!(latch.observe(Some(&request("/a"))));
    assert!(!latch.observe(Some(&request("/a"))));
    assert!(!latch.observe(Some(&request("/a"))));
}

#[test]
fn latch_fires_again_for_new_location() {
    let mut latch = RedirectLatch::default();
    assert!(latch.observe(Some(&request("/a"))));
    assert!(latch.observe(Some(&request("/b"))));
}

#[test]
fn latch_rearms_after_leaving_unauthenticated() {
    let mut latch = RedirectLatch::default();
    assert!(latch.observe(Some(&request("/a"))));
    assert!(!latch.observe(None));
    assert!(latch.observe(Some(&request("/a"))));
}

// =============================================================
// start_login
// =============================================================

#[test]
fn start_login_stores_return_url_and_scoped_role() {
    let session = RecordingSession::default();
    let storage = MemoryStorage::default();
    start_login(&session, &storage, &LoginRequest { return_url: "/admin?tab=1".to_owned(), role: Some("admin".to_owned()) });

    assert_eq!(storage.get(RETURN_URL_KEY).as_deref(), Some("/admin?tab=1"));
    assert_eq!(storage.get(LOGIN_ROLE_KEY).as_deref(), Some("admin"));
    assert_eq!(*session.calls.borrow(), vec!["login_with_role:admin".to_owned()]);
}

#[test]
fn start_login_generic_clears_stale_role() {
    let session = RecordingSession::default();
    let storage = MemoryStorage::default();
    storage.set(LOGIN_ROLE_KEY, "admin");
    start_login(&session, &storage, &request("/"));

    assert_eq!(storage.get(LOGIN_ROLE_KEY), None);
    assert_eq!(*session.calls.borrow(), vec!["login".to_owned()]);
}

#[test]
fn repeated_guard_runs_redirect_exactly_once() {
    let session = RecordingSession::default();
    let storage = MemoryStorage::default();
    let config = AuthConfig::default();
    let mut latch = RedirectLatch::default();

    for _ in 0..3 {
        let req = login_request(&SessionStatus::Unauthenticated, None, "/dashboard", "", &config);
        if latch.observe(req.as_ref()) {
            start_login(&session, &storage, req.as_ref().unwrap());
        }
    }

    assert_eq!(session.calls.borrow().len(), 1);
}
