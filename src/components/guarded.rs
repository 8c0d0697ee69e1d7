//! Route wrapper that applies the navigation guard before its view renders.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::config::ClientConfig;
use crate::router::guard::{Navigation, full_location, guard};
use crate::state::auth::AuthState;

/// Render `children` only when the guard allows the current location.
///
/// Re-evaluates when the location or the session changes, so signing out on
/// a protected page moves to login without a reload.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let location = use_location();

    move || {
        let target = full_location(&location.pathname.get(), &location.search.get());
        match guard(&target, &auth.get().session, &config) {
            Navigation::Redirect { to } => view! { <Redirect path=to/> }.into_any(),
            Navigation::Allow { title } => view! {
                <Title text=title/>
                {children()}
            }
            .into_any(),
        }
    }
}
