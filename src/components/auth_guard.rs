//! Route guard protecting authenticated routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `HubSession` from context. Rendering is a single dispatch over a
//! memoized `GuardView`; the login redirect runs in an effect keyed on
//! session status and location, latched so it fires once per location.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::access_denied::AccessDeniedScreen;
use crate::components::loading_screen::AuthLoadingScreen;
use crate::state::session::{HubSession, SessionProvider};
use crate::util::guard::{GuardView, RedirectLatch, decide, login_request, start_login};
use crate::util::storage::BrowserTabStorage;

/// Render `children` only for a session that satisfies `required_role`.
#[component]
pub fn AuthGuard(#[prop(optional, into)] required_role: Option<String>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<HubSession>();
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);
    let latch = StoredValue::new(RedirectLatch::default());

    let effect_role = required_role.clone();
    Effect::new(move || {
        let status = session.status();
        let config = session.config();
        let request = login_request(
            &status,
            effect_role.as_deref(),
            &pathname.get(),
            &search.get(),
            &config,
        );
        let fire = latch.try_update_value(|l| l.observe(request.as_ref())).unwrap_or(false);
        if let (true, Some(request)) = (fire, request) {
            log::debug!("no session for {}; starting login", request.return_url);
            start_login(&session, &BrowserTabStorage, &request);
        }
    });

    // Children are rebuilt only when the branch changes.
    let callback_path = session.config().callback_path;
    let guard_view = Memo::new(move |_| {
        decide(&session.status(), required_role.as_deref(), &pathname.get(), &callback_path)
    });

    view! {
        {move || match guard_view.get() {
            GuardView::Loading => view! {
                <AuthLoadingScreen
                    message="Checking Access..."
                    subtitle="Please wait while we secure your connection"
                />
            }
            .into_any(),
            GuardView::Denied(role) => view! { <AccessDeniedScreen required_role=role/> }.into_any(),
            GuardView::Authorized => children().into_any(),
            GuardView::Redirecting => ().into_any(),
        }}
    }
}
