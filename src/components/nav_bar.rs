//! Top navigation with identity-dependent links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::use_api;
use crate::router::routes::{RouteName, route};
use crate::state::auth::{AuthState, sign_out};

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = use_api();
    let navigate = use_navigate();

    let on_logout = move |_| {
        api.with_value(|api| sign_out(api.session()));
        navigate(route(RouteName::Home).path, NavigateOptions::default());
    };

    let username = move || auth.get().user().map(|u| u.username.clone()).unwrap_or_default();

    view! {
        <header class="nav-bar">
            <A href=route(RouteName::Home).path attr:class="nav-bar__brand">
                "Blog"
            </A>
            <nav class="nav-bar__links">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <A href=route(RouteName::Login).path>"Sign in"</A>
                            <A href=route(RouteName::Register).path>"Register"</A>
                        }
                    }
                >
                    <A href=route(RouteName::ArticleCreate).path>"Write"</A>
                    <A href=route(RouteName::Profile).path>{username}</A>
                    <button class="nav-bar__logout" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
