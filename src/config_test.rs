use super::*;

// =============================================================
// from_values
// =============================================================

#[test]
fn defaults_to_fixed_hub() {
    let config = AuthConfig::from_values(None, Some("client-1"), None, None);
    assert_eq!(config.hub_url, DEFAULT_HUB_URL);
    assert_eq!(config.client_id, "client-1");
    assert_eq!(config.callback_path, "/callback");
    assert_eq!(config.unscoped_login, UnscopedLogin::Generic);
}

#[test]
fn trims_trailing_slash_from_hub() {
    let config = AuthConfig::from_values(Some("https://hub.example.com/"), None, None, None);
    assert_eq!(config.hub_url, "https://hub.example.com");
}

#[test]
fn blank_values_count_as_unset() {
    let config = AuthConfig::from_values(Some("   "), Some(""), Some(" "), Some(""));
    assert_eq!(config.hub_url, DEFAULT_HUB_URL);
    assert!(config.client_id.is_empty());
    assert!(config.redirect_uri.is_none());
    assert_eq!(config.unscoped_login, UnscopedLogin::Generic);
}

#[test]
fn wildcard_role_switches_unscoped_login() {
    let config = AuthConfig::from_values(None, None, None, Some("*"));
    assert_eq!(config.unscoped_login, UnscopedLogin::Wildcard("*".to_owned()));
    assert_eq!(config.unscoped_role(), Some("*"));
}

#[test]
fn generic_login_has_no_unscoped_role() {
    assert_eq!(AuthConfig::default().unscoped_role(), None);
}

// =============================================================
// redirect_uri_for
// =============================================================

#[test]
fn redirect_uri_derived_from_origin() {
    let config = AuthConfig::default();
    assert_eq!(config.redirect_uri_for("https://app.example.com"), "https://app.example.com/callback");
    assert_eq!(config.redirect_uri_for("https://app.example.com/"), "https://app.example.com/callback");
}

#[test]
fn explicit_redirect_uri_wins() {
    let config = AuthConfig::from_values(None, None, Some("https://other.example.com/cb"), None);
    assert_eq!(config.redirect_uri_for("https://app.example.com"), "https://other.example.com/cb");
}

#[cfg(not(feature = "csr"))]
#[test]
fn current_origin_is_empty_outside_browser() {
    assert!(current_origin().is_empty());
}
