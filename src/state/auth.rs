//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the reactive mirror of the [`SessionStore`], used by the
//! navigation guard and identity-dependent views. The helpers below are the
//! only places that start or end a session on purpose; the request pipeline
//! ends it on a 401.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::{Session, SessionStore};
use crate::net::api::ApiClient;
use crate::net::types::{ApiError, Credentials, LoginData, UserInfo};

/// Authentication state as seen by the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
}

impl AuthState {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self { session: session.clone() }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The signed-in profile, if any.
    #[must_use]
    pub fn user(&self) -> Option<&UserInfo> {
        self.is_authenticated().then_some(&self.session.user_info)
    }
}

/// Log in and store the returned token and profile.
///
/// # Errors
///
/// Returns the API error; the session is left untouched on failure.
pub async fn sign_in(api: &ApiClient, credentials: &Credentials) -> Result<LoginData, ApiError> {
    let data = api.login(credentials).await?;
    api.session().set_user(data.token.clone(), data.user_info());
    leptos::logging::log!("signed in as {}", data.username);
    Ok(data)
}

/// Refresh the stored profile from `GET /user/info`, keeping fields the
/// endpoint does not return.
///
/// # Errors
///
/// Returns the API error.
pub async fn refresh_profile(api: &ApiClient) -> Result<UserInfo, ApiError> {
    let fetched = api.user_info().await?;
    let current = api.session().snapshot().user_info;
    let merged = UserInfo {
        id: if fetched.id == 0 { current.id } else { fetched.id },
        role: if fetched.role.is_empty() { current.role } else { fetched.role },
        ..fetched
    };
    api.session().update_profile(merged.clone());
    Ok(merged)
}

/// End the session locally. The API has no logout endpoint; tokens simply
/// stop being sent.
pub fn sign_out(session: &SessionStore) {
    session.clear_user();
    leptos::logging::log!("signed out");
}
