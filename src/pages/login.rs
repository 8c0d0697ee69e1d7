//! Sign-in and registration pages.
//!
//! Both are guest-only routes. A successful sign-in returns to the location
//! carried in `?redirect=` when it is a safe same-origin path.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::use_api;
use crate::config::ClientConfig;
use crate::net::types::{Credentials, Registration};
use crate::router::guard::{REDIRECT_PARAM, post_login_target};
use crate::router::routes::{RouteName, route};
use crate::state::auth::sign_in;

const USERNAME_MIN_CHARS: usize = 2;
const USERNAME_MAX_CHARS: usize = 20;
pub const PASSWORD_MIN_CHARS: usize = 6;

fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

fn validate_registration(username: &str, password: &str, confirm: &str) -> Result<Registration, &'static str> {
    let username = username.trim();
    let chars = username.chars().count();
    if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&chars) {
        return Err("Username must be 2-20 characters.");
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Registration { username: username.to_owned(), password: password.to_owned(), avatar: String::new() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let config = expect_context::<ClientConfig>();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let target = post_login_target(query.read().get(REDIRECT_PARAM).as_deref(), &config);
        let api = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match sign_in(&api, &credentials).await {
                Ok(_) => navigate(&target, NavigateOptions::default()),
                Err(_) => busy.set(false),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "No account? "
                    <A href=route(RouteName::Register).path>"Register"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_registration(&username.get(), &password.get(), &confirm.get()) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.register(&registration).await {
                Ok(()) => {
                    leptos::logging::log!("registered {}", registration.username);
                    navigate(route(RouteName::Login).path, NavigateOptions::default());
                }
                Err(_) => busy.set(false),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username (2-20 characters)"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (6+ characters)"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already registered? "
                    <A href=route(RouteName::Login).path>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
