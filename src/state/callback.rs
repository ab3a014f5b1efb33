//! OAuth authorization-code callback state machine.
//!
//! DESIGN
//! ======
//! `CallbackStatus` is both the view state and the "already processed" flag:
//! `start` only acts from `Unstarted` and moves away from it before any await,
//! so a re-run effect can never exchange the same code twice.
//!
//! ```text
//! Unstarted --error param--> Error(code)
//!     |------no code-------> Redirected
//!     '------code----------> Exchanging --ok--> Done
//!                                 '-----fail--> Error(code)
//! ```

#[cfg(test)]
#[path = "callback_test.rs"]
mod callback_test;

use std::future::Future;

use url::form_urlencoded;

use crate::net::hub::HubError;
use crate::net::types::TokenResponse;
use crate::state::session::SessionProvider;
use crate::util::messages::{CALLBACK_FAILED, TOKEN_EXCHANGE_FAILED};
use crate::util::storage::{LOGIN_ROLE_KEY, TabStorage};

/// Query parameters the hub sends back to `/callback`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    /// Return path echoed back from the authorize request.
    pub state: Option<String>,
}

impl CallbackParams {
    /// Parse a query string with or without the leading `?`.
    ///
    /// Blank values count as absent and the first occurrence of a key wins.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            if value.trim().is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                "code" => &mut params.code,
                "error" => &mut params.error,
                "state" => &mut params.state,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CallbackStatus {
    #[default]
    Unstarted,
    Exchanging,
    /// No code in the URL; sent home.
    Redirected,
    Done,
    Error(String),
}

/// Side effect to perform after leaving `Unstarted`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackStep {
    /// The hub reported an error; nothing to call.
    ReportError(String),
    GoHome,
    Exchange {
        code: String,
        state: Option<String>,
    },
}

impl CallbackStatus {
    /// Leave `Unstarted` based on the callback URL. Returns `None` on every
    /// call after the first.
    pub fn start(&mut self, params: &CallbackParams) -> Option<CallbackStep> {
        if *self != Self::Unstarted {
            return None;
        }
        let (next, step) = if let Some(error) = &params.error {
            (Self::Error(error.clone()), CallbackStep::ReportError(error.clone()))
        } else if let Some(code) = &params.code {
            (Self::Exchanging, CallbackStep::Exchange { code: code.clone(), state: params.state.clone() })
        } else {
            (Self::Redirected, CallbackStep::GoHome)
        };
        *self = next;
        Some(step)
    }

    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Error(code) => Some(code.as_str()),
            _ => None,
        }
    }
}

/// Everything the exchange needs from the outside world.
pub trait CallbackPorts {
    fn exchange_code(&self, code: &str) -> impl Future<Output = Result<TokenResponse, HubError>>;
    fn refresh_auth(&self) -> impl Future<Output = ()>;
    /// Consume the return URL stored by the guard.
    fn take_return_url(&self) -> Option<String>;
    /// Forget the role the guard logged in with; only needed for a retry.
    fn clear_login_role(&self);
    fn navigate(&self, path: &str);
}

/// Same-origin absolute path; rejects protocol-relative `//host` forms.
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}

/// Where to land after a successful exchange: the echoed `state`, then the
/// stored return URL, then `/`.
pub fn return_target(state: Option<&str>, stored: Option<&str>) -> String {
    state
        .into_iter()
        .chain(stored)
        .find(|path| is_local_path(path))
        .unwrap_or("/")
        .to_owned()
}

/// Exchange `code` once and settle the status.
pub async fn run_exchange<P: CallbackPorts>(code: &str, state: Option<&str>, ports: &P) -> CallbackStatus {
    match ports.exchange_code(code).await {
        Ok(resp) if resp.is_authenticated() => {
            log::info!("authorization code exchanged");
            ports.refresh_auth().await;
            let stored = ports.take_return_url();
            ports.clear_login_role();
            ports.navigate(&return_target(state, stored.as_deref()));
            CallbackStatus::Done
        }
        Ok(resp) => {
            let reason = resp.error_code().unwrap_or(TOKEN_EXCHANGE_FAILED).to_owned();
            log::warn!("token exchange rejected: {reason}");
            CallbackStatus::Error(reason)
        }
        Err(e) => {
            log::error!("token exchange failed: {e}");
            CallbackStatus::Error(CALLBACK_FAILED.to_owned())
        }
    }
}

/// "Retry login" action: replay the role-scoped login the guard started,
/// or a generic login when none was recorded.
pub fn retry_login<P, S>(provider: &P, storage: &S)
where
    P: SessionProvider,
    S: TabStorage,
{
    match storage.get(LOGIN_ROLE_KEY) {
        Some(role) => provider.login_with_role(&role),
        None => provider.login(),
    }
}
