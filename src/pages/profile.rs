//! Signed-in user's profile, password change and sign-out.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::login::PASSWORD_MIN_CHARS;
use crate::app::use_api;
use crate::net::types::{PasswordChange, UserInfo};
use crate::router::routes::{RouteName, route};
use crate::state::auth::{AuthState, refresh_profile, sign_out};

fn validate_password_change(old: &str, new: &str, confirm: &str) -> Result<PasswordChange, &'static str> {
    if old.is_empty() {
        return Err("Enter your current password.");
    }
    if new.chars().count() < PASSWORD_MIN_CHARS {
        return Err("New password must be at least 6 characters.");
    }
    if new != confirm {
        return Err("Passwords do not match.");
    }
    if new == old {
        return Err("New password must differ from the current one.");
    }
    Ok(PasswordChange { old_password: old.to_owned(), new_password: new.to_owned() })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = use_api();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let _ = refresh_profile(&api).await;
        });
    }

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let change = match validate_password_change(&old_password.get(), &new_password.get(), &confirm.get()) {
            Ok(change) => change,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            if api.change_password(&change).await.is_ok() {
                old_password.set(String::new());
                new_password.set(String::new());
                confirm.set(String::new());
                info.set("Password updated.".to_owned());
            }
            busy.set(false);
        });
    };

    let on_sign_out = move |_| {
        api.with_value(|api| sign_out(api.session()));
        navigate(route(RouteName::Home).path, NavigateOptions::default());
    };

    let field = move |pick: fn(&UserInfo) -> String| {
        move || auth.with(|a| a.user().map(pick).unwrap_or_default())
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <dl class="profile-fields">
                <dt>"Username"</dt>
                <dd>{field(|u| u.username.clone())}</dd>
                <dt>"User id"</dt>
                <dd>{field(|u| u.id.to_string())}</dd>
                <dt>"Role"</dt>
                <dd>{field(|u| u.role.clone())}</dd>
            </dl>

            <h2>"Change password"</h2>
            <form class="profile-form" on:submit=on_change_password>
                <input
                    type="password"
                    placeholder="Current password"
                    autocomplete="current-password"
                    prop:value=move || old_password.get()
                    on:input=move |ev| old_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="New password"
                    autocomplete="new-password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm new password"
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Update password"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="profile-message">{move || info.get()}</p>
            </Show>

            <button class="profile-sign-out" on:click=on_sign_out>"Sign out"</button>
        </div>
    }
}
