//! Terminal screen for an authenticated visitor whose role does not match.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Access-denied screen naming the role the route requires.
///
/// "Go home" runs `on_home` when the caller wires one, otherwise navigates to `/`.
#[component]
pub fn AccessDeniedScreen(
    #[prop(into)] required_role: String,
    #[prop(optional)] on_home: Option<Callback<()>>,
) -> impl IntoView {
    let navigate = use_navigate();
    let on_home_click = move |_| match on_home.as_ref() {
        Some(on_home) => on_home.run(()),
        None => navigate("/", NavigateOptions::default()),
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card auth-card--denied">
                <h2 class="auth-card__title">"Access Denied"</h2>
                <p class="auth-card__subtitle">
                    "This page requires the "
                    <strong class="auth-card__role">{required_role}</strong>
                    " role."
                </p>
                <button class="auth-button" on:click=on_home_click>
                    "Go Home"
                </button>
            </div>
        </div>
    }
}
