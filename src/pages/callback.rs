//! OAuth callback page at `/callback`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hub redirects here with `?code=...&state=...` or `?error=...`. The page
//! drives `CallbackStatus` once per mount: the status leaves `Unstarted`
//! synchronously inside the effect, before the exchange is spawned.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_screen::AuthLoadingScreen;
use crate::state::callback::{CallbackParams, CallbackStatus, CallbackStep, retry_login};
use crate::state::session::HubSession;
use crate::util::messages::{HOME_LABEL, RETRY_LABEL, callback_error_message};
use crate::util::storage::BrowserTabStorage;

#[cfg(feature = "csr")]
mod ports {
    use leptos_router::NavigateOptions;

    use crate::config::AuthConfig;
    use crate::net::hub::{self, HubError};
    use crate::net::types::TokenResponse;
    use crate::state::callback::CallbackPorts;
    use crate::state::session::{HubSession, SessionProvider};
    use crate::util::storage::{BrowserTabStorage, LOGIN_ROLE_KEY, RETURN_URL_KEY, TabStorage};

    /// Browser wiring for the exchange: hub over `gloo-net`, session refresh,
    /// `sessionStorage` and the router's navigate.
    pub(super) struct PagePorts<N> {
        pub session: HubSession,
        pub config: AuthConfig,
        pub navigate: N,
    }

    impl<N> CallbackPorts for PagePorts<N>
    where
        N: Fn(&str, NavigateOptions),
    {
        async fn exchange_code(&self, code: &str) -> Result<TokenResponse, HubError> {
            hub::exchange_code(&self.config, code).await
        }

        async fn refresh_auth(&self) {
            self.session.refresh_auth().await;
        }

        fn take_return_url(&self) -> Option<String> {
            BrowserTabStorage.take(RETURN_URL_KEY)
        }

        fn clear_login_role(&self) {
            BrowserTabStorage.remove(LOGIN_ROLE_KEY);
        }

        fn navigate(&self, path: &str) {
            (self.navigate)(path, NavigateOptions::default());
        }
    }
}

#[component]
pub fn CallbackPage() -> impl IntoView {
    let session = expect_context::<HubSession>();
    let search = use_location().search;
    let navigate = use_navigate();
    let status = RwSignal::new(CallbackStatus::Unstarted);

    Effect::new(move || {
        let params = CallbackParams::from_query(&search.get_untracked());
        let Some(step) = status.try_update(|s| s.start(&params)).flatten() else {
            return;
        };
        match step {
            CallbackStep::ReportError(code) => log::warn!("identity hub returned error: {code}"),
            CallbackStep::GoHome => navigate("/", NavigateOptions::default()),
            CallbackStep::Exchange { code, state } => {
                #[cfg(feature = "csr")]
                {
                    let ports = ports::PagePorts { session, config: session.config(), navigate: navigate.clone() };
                    leptos::task::spawn_local(async move {
                        let next = crate::state::callback::run_exchange(&code, state.as_deref(), &ports).await;
                        // The page may already be gone after a successful navigate.
                        let _ = status.try_set(next);
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (code, state);
                }
            }
        }
    });

    view! {
        {move || match status.get() {
            CallbackStatus::Error(code) => view! { <CallbackError code=code session=session/> }.into_any(),
            _ => view! {
                <AuthLoadingScreen message="Processing Login..." subtitle="Please wait"/>
            }
            .into_any(),
        }}
    }
}

/// Localized error screen with retry and home actions.
#[component]
fn CallbackError(code: String, session: HubSession) -> impl IntoView {
    let message = callback_error_message(&code);
    let navigate = use_navigate();

    view! {
        <div class="auth-screen">
            <div class="auth-card auth-card--error" role="alert">
                <h2 class="auth-card__title">{message.title}</h2>
                <p class="auth-card__subtitle">{message.body}</p>
                <div class="auth-card__actions">
                    <button class="auth-button" on:click=move |_| retry_login(&session, &BrowserTabStorage)>
                        {RETRY_LABEL}
                    </button>
                    <button
                        class="auth-button auth-button--secondary"
                        on:click=move |_| navigate("/", NavigateOptions::default())
                    >
                        {HOME_LABEL}
                    </button>
                </div>
            </div>
        </div>
    }
}
