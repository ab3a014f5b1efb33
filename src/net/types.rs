//! Wire DTOs for the identity hub REST endpoints.
//!
//! DESIGN
//! ======
//! The hub wraps every answer in the same `{success, user?, error?}` envelope.
//! Fields the hub may omit are defaulted so a partial body still decodes and
//! the caller decides what "success" means.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// OAuth grant type sent with every code exchange.
pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";

/// Body of `POST /api/oauth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRequest<'a> {
    pub code: &'a str,
    pub client_id: &'a str,
    pub grant_type: &'static str,
}

impl<'a> TokenRequest<'a> {
    #[must_use]
    pub fn authorization_code(code: &'a str, client_id: &'a str) -> Self {
        Self { code, client_id, grant_type: GRANT_TYPE_AUTHORIZATION_CODE }
    }
}

/// Hub user as returned inside the envelope.
///
/// Only `role` drives behavior; the rest is carried for display. `id` is kept
/// as raw JSON because hubs disagree on numeric vs string identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubUser {
    pub id: Option<serde_json::Value>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

/// `{success, user?, error?}` envelope shared by the token and session endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HubEnvelope {
    pub success: bool,
    pub user: Option<HubUser>,
    pub error: Option<String>,
}

/// Response of the token exchange.
pub type TokenResponse = HubEnvelope;

impl HubEnvelope {
    /// A session exists only when the hub says so and hands back a user.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.success && self.user.is_some()
    }

    /// Hub-provided error code, ignoring blanks.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }

    /// The user when authenticated, consuming the envelope.
    #[must_use]
    pub fn into_user(self) -> Option<HubUser> {
        if self.success { self.user } else { None }
    }
}
