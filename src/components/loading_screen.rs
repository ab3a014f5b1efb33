//! Full-screen placeholder shown while the session is being checked or a
//! callback is in flight.

use leptos::prelude::*;

pub const DEFAULT_MESSAGE: &str = "Authenticating...";
pub const DEFAULT_SUBTITLE: &str = "Please wait while we verify your identity";

#[component]
pub fn AuthLoadingScreen(
    #[prop(optional, into)] message: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    let message = message.unwrap_or_else(|| DEFAULT_MESSAGE.to_owned());
    let subtitle = subtitle.unwrap_or_else(|| DEFAULT_SUBTITLE.to_owned());

    view! {
        <div class="auth-screen" role="status" aria-live="polite">
            <div class="auth-card">
                <div class="auth-card__spinner" aria-hidden="true"></div>
                <h2 class="auth-card__title">{message}</h2>
                <p class="auth-card__subtitle">{subtitle}</p>
                <div class="auth-card__progress">
                    <div class="auth-card__progress-bar"></div>
                </div>
            </div>
        </div>
    }
}
