//! Identity hub configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no process environment, so values are baked in at build
//! time with `option_env!`. Everything downstream receives an `AuthConfig`
//! value and never reads the environment itself.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Hub used when `AUTH_HUB_URL` is not set at build time.
pub const DEFAULT_HUB_URL: &str = "https://bbh.codex-th.com";

/// Route the hub redirects back to after authorization.
pub const DEFAULT_CALLBACK_PATH: &str = "/callback";

/// How the guard starts a login when the route requires no role.
///
/// Some hub deployments reject an authorize request without a role, others
/// reject an unknown wildcard, so this is left to configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UnscopedLogin {
    /// Plain `login()`.
    #[default]
    Generic,
    /// `login_with_role(role)` with a fixed wildcard role.
    Wildcard(String),
}

/// Identity hub settings shared by the guard, callback and session provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub hub_url: String,
    pub client_id: String,
    pub redirect_uri: Option<String>,
    pub callback_path: String,
    pub unscoped_login: UnscopedLogin,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

impl AuthConfig {
    /// Load from `AUTH_HUB_URL`, `AUTH_CLIENT_ID`, `AUTH_REDIRECT_URI` and
    /// `AUTH_WILDCARD_ROLE` captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("AUTH_HUB_URL"),
            option_env!("AUTH_CLIENT_ID"),
            option_env!("AUTH_REDIRECT_URI"),
            option_env!("AUTH_WILDCARD_ROLE"),
        )
    }

    /// Build from raw optional values. Blank values count as unset.
    #[must_use]
    pub fn from_values(
        hub_url: Option<&str>,
        client_id: Option<&str>,
        redirect_uri: Option<&str>,
        wildcard_role: Option<&str>,
    ) -> Self {
        let hub_url = non_blank(hub_url)
            .unwrap_or(DEFAULT_HUB_URL)
            .trim_end_matches('/')
            .to_owned();
        let client_id = non_blank(client_id).unwrap_or_default().to_owned();
        if client_id.is_empty() {
            log::warn!("AUTH_CLIENT_ID is not set; token exchange will be rejected by the hub");
        }
        let unscoped_login =
            non_blank(wildcard_role).map_or(UnscopedLogin::Generic, |role| UnscopedLogin::Wildcard(role.to_owned()));

        Self {
            hub_url,
            client_id,
            redirect_uri: non_blank(redirect_uri).map(str::to_owned),
            callback_path: DEFAULT_CALLBACK_PATH.to_owned(),
            unscoped_login,
        }
    }

    /// Redirect URI sent to the hub: the configured one, else the callback
    /// path on the given origin.
    #[must_use]
    pub fn redirect_uri_for(&self, origin: &str) -> String {
        match &self.redirect_uri {
            Some(uri) => uri.clone(),
            None => format!("{}{}", origin.trim_end_matches('/'), self.callback_path),
        }
    }

    /// Role to request when the route itself requires none.
    #[must_use]
    pub fn unscoped_role(&self) -> Option<&str> {
        match &self.unscoped_login {
            UnscopedLogin::Generic => None,
            UnscopedLogin::Wildcard(role) => Some(role.as_str()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Origin of the current page, or an empty string outside the browser.
pub fn current_origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
