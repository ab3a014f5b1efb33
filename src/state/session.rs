//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `HubSession` is the single writer of session state. The guard and the
//! callback only see it through `SessionProvider`, which keeps them testable
//! with plain fakes and keeps hub details out of route components.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use leptos::prelude::*;

use crate::config::{AuthConfig, current_origin};
use crate::net::hub::{self, HubError};
use crate::net::types::HubUser;
use crate::util::storage::{BrowserTabStorage, RETURN_URL_KEY, TabStorage};

/// Where the current visitor stands with the identity hub.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Session check has not answered yet.
    #[default]
    Loading,
    Authenticated {
        role: Option<String>,
    },
    Unauthenticated,
}

impl SessionStatus {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Session role, only meaningful when authenticated.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        match self {
            Self::Authenticated { role } => role.as_deref(),
            _ => None,
        }
    }
}

/// Session status plus the user the hub reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<HubUser>,
}

impl SessionState {
    #[must_use]
    pub fn signed_out() -> Self {
        Self { status: SessionStatus::Unauthenticated, user: None }
    }

    #[must_use]
    pub fn signed_in(user: HubUser) -> Self {
        Self { status: SessionStatus::Authenticated { role: user.role.clone() }, user: Some(user) }
    }

    /// Next state after a session lookup. A failed lookup is indistinguishable
    /// from "no session" so the guard can fall back to a login redirect.
    #[must_use]
    pub fn from_lookup(result: Result<Option<HubUser>, HubError>) -> Self {
        match result {
            Ok(Some(user)) => Self::signed_in(user),
            Ok(None) => Self::signed_out(),
            Err(e) => {
                log::warn!("session check failed: {e}");
                Self::signed_out()
            }
        }
    }
}

/// Narrow read/command surface of the session owner.
pub trait SessionProvider {
    fn status(&self) -> SessionStatus;

    fn is_authenticated(&self) -> bool {
        self.status().is_authenticated()
    }

    fn is_loading(&self) -> bool {
        self.status().is_loading()
    }

    fn role(&self) -> Option<String> {
        self.status().role().map(str::to_owned)
    }

    /// Start a login without a role.
    fn login(&self);

    /// Start a login scoped to `role`.
    fn login_with_role(&self, role: &str);

    /// Re-read the cookie-backed session from the hub.
    fn refresh_auth(&self) -> impl Future<Output = ()>;
}

/// Hub-backed session provider, shared through Leptos context.
#[derive(Clone, Copy)]
pub struct HubSession {
    state: RwSignal<SessionState>,
    config: StoredValue<AuthConfig>,
    /// Bumped each time a session check starts; only the latest may write.
    generation: StoredValue<u64>,
}

impl HubSession {
    /// Create a session in the `Loading` state.
    pub fn new(config: AuthConfig) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            config: StoredValue::new(config),
            generation: StoredValue::new(0),
        }
    }

    /// Create the session, provide it as context and start the initial
    /// session check in the browser.
    pub fn install(config: AuthConfig) -> Self {
        let session = Self::new(config);
        provide_context(session);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            session.refresh_auth().await;
        });

        session
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn config(&self) -> AuthConfig {
        self.config.get_value()
    }

    /// End the hub session. The local state is cleared even if the hub call
    /// fails, so the guard sends the visitor back through login.
    pub async fn logout(self) {
        let config = self.config.get_value();
        if let Err(e) = hub::logout(&config).await {
            log::warn!("hub logout failed: {e}");
        }
        self.state.set(SessionState::signed_out());
    }

    fn redirect_to_hub(&self, role: Option<&str>) {
        let config = self.config.get_value();
        let return_url = BrowserTabStorage.get(RETURN_URL_KEY);
        let url = hub::authorize_url(&config, &current_origin(), role, return_url.as_deref());
        log::debug!("redirecting to identity hub (role: {})", role.unwrap_or("-"));

        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(&url).is_err() {
                    log::error!("failed to navigate to identity hub");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
        }
    }
}

impl SessionProvider for HubSession {
    fn status(&self) -> SessionStatus {
        self.state.with(|s| s.status.clone())
    }

    fn login(&self) {
        self.redirect_to_hub(None);
    }

    fn login_with_role(&self, role: &str) {
        self.redirect_to_hub(Some(role));
    }

    /// The lookup result is dropped when a newer check has started or the
    /// state changed while it was in flight, so a check sent before login
    /// cannot sign the visitor back out.
    fn refresh_auth(&self) -> impl Future<Output = ()> {
        let state = self.state;
        let generation = self.generation;
        let config = self.config.get_value();
        let ticket = generation
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .unwrap_or_default();
        let seen = state.get_untracked();
        async move {
            let next = SessionState::from_lookup(hub::fetch_session(&config).await);
            let latest = generation.try_get_value() == Some(ticket);
            let untouched = state.try_with_untracked(|s| *s == seen).unwrap_or(false);
            if latest && untouched {
                state.set(next);
            } else {
                log::debug!("dropping stale session check #{ticket}");
            }
        }
    }
}
