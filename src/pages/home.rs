//! Landing page for a signed-in visitor.

use leptos::prelude::*;

use crate::state::session::HubSession;

/// Shows who is signed in and offers sign-out. Always rendered behind `AuthGuard`.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<HubSession>();
    let state = session.state();

    let display_name = move || {
        state.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.name.clone().or_else(|| u.email.clone()))
                .unwrap_or_else(|| "-".to_owned())
        })
    };
    let role = move || state.with(|s| s.status.role().unwrap_or("-").to_owned());

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(session.logout());
    };

    view! {
        <div class="home-page">
            <h1>"Signed in"</h1>
            <dl class="home-page__session">
                <dt>"User"</dt>
                <dd>{display_name}</dd>
                <dt>"Role"</dt>
                <dd>{role}</dd>
            </dl>
            <button class="auth-button auth-button--secondary" on:click=on_logout>
                "Sign out"
            </button>
        </div>
    }
}
