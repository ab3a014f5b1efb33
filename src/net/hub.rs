//! REST helpers for the identity hub.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the hub can set and read its HttpOnly session
//! cookie. Native builds get stubs returning `HubError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! The token endpoint answers failures with a JSON body and a non-2xx status,
//! so its body is decoded regardless of status. Only transport and decode
//! failures surface as `HubError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "hub_test.rs"]
mod hub_test;

use url::form_urlencoded;

use super::types::HubUser;
#[cfg(feature = "csr")]
use super::types::{HubEnvelope, TokenRequest};
use super::types::TokenResponse;
use crate::config::AuthConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HubError {
    #[error("hub request failed: {0}")]
    Request(String),
    #[error("hub response could not be decoded: {0}")]
    Decode(String),
    #[error("hub returned status {0}")]
    Status(u16),
    #[error("identity hub is only reachable from the browser")]
    Unavailable,
}

pub fn token_endpoint(config: &AuthConfig) -> String {
    format!("{}/api/oauth/token", config.hub_url)
}

pub fn session_endpoint(config: &AuthConfig) -> String {
    format!("{}/api/auth/session", config.hub_url)
}

pub fn logout_endpoint(config: &AuthConfig) -> String {
    format!("{}/api/auth/logout", config.hub_url)
}

/// Build the hub authorization URL the browser is sent to for login.
///
/// `state` carries the return path through the round trip; the hub echoes it
/// back on `/callback`.
pub fn authorize_url(config: &AuthConfig, origin: &str, role: Option<&str>, state: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", &config.redirect_uri_for(origin))
        .append_pair("response_type", "code");
    if let Some(role) = role {
        query.append_pair("role", role);
    }
    if let Some(state) = state {
        query.append_pair("state", state);
    }
    format!("{}/oauth/authorize?{}", config.hub_url, query.finish())
}

/// Exchange an authorization code at `POST /api/oauth/token`.
///
/// # Errors
///
/// Returns `HubError::Request` if the request cannot be sent and
/// `HubError::Decode` if the body is not the expected JSON envelope.
pub async fn exchange_code(config: &AuthConfig, code: &str) -> Result<TokenResponse, HubError> {
    #[cfg(feature = "csr")]
    {
        let body = TokenRequest::authorization_code(code, &config.client_id);
        let resp = gloo_net::http::Request::post(&token_endpoint(config))
            .credentials(web_sys::RequestCredentials::Include)
            .json(&body)
            .map_err(|e| HubError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| HubError::Request(e.to_string()))?;
        if !resp.ok() {
            log::warn!("token endpoint returned status {}", resp.status());
        }
        resp.json::<HubEnvelope>()
            .await
            .map_err(|e| HubError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, code);
        Err(HubError::Unavailable)
    }
}

/// Read the cookie-backed session from `GET /api/auth/session`.
///
/// A non-2xx status means "no session" and yields `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn fetch_session(config: &AuthConfig) -> Result<Option<HubUser>, HubError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&session_endpoint(config))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| HubError::Request(e.to_string()))?;
        if !resp.ok() {
            return Ok(None);
        }
        let body: HubEnvelope = resp.json().await.map_err(|e| HubError::Decode(e.to_string()))?;
        Ok(body.into_user())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(HubError::Unavailable)
    }
}

/// End the hub session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the hub rejects it.
pub async fn logout(config: &AuthConfig) -> Result<(), HubError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&logout_endpoint(config))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| HubError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(HubError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(HubError::Unavailable)
    }
}
