//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_guard::AuthGuard;
use crate::config::AuthConfig;
use crate::pages::{callback::CallbackPage, home::HomePage};
use crate::state::session::HubSession;

/// Root application component.
///
/// Installs the hub session as context. Every route sits behind an
/// `AuthGuard` so role-scoped routes start role-scoped logins; the guard lets
/// the OAuth callback path through.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    HubSession::install(AuthConfig::from_build_env());

    view! {
        <Title text="Sign in"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("callback")
                    view=|| view! { <AuthGuard><CallbackPage/></AuthGuard> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <AuthGuard><HomePage/></AuthGuard> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <AuthGuard required_role="admin"><HomePage/></AuthGuard> }
                />
            </Routes>
        </Router>
    }
}
