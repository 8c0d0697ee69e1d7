//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before a routed view renders. It only reads the session, never
//! changes it, so signed-in/signed-out is decided entirely by whether the
//! token is empty at the moment of navigation.
//!
//! DECISIONS
//! =========
//! - unknown path: redirect home
//! - `requires_auth` while signed out: redirect to login, carrying the
//!   requested location as `?redirect=`
//! - `guest_only` while signed in: redirect home
//! - otherwise: allow, with the route title (or the default title)

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::match_route;
use crate::config::ClientConfig;
use crate::state::session::Session;

/// Query parameter carrying the location to return to after login.
pub const REDIRECT_PARAM: &str = "redirect";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Allow { title: String },
    Redirect { to: String },
}

/// Decide whether `location` (path plus optional query) may be shown.
#[must_use]
pub fn guard(location: &str, session: &Session, config: &ClientConfig) -> Navigation {
    let Some(route) = match_route(location) else {
        return Navigation::Redirect { to: config.home_path.clone() };
    };

    if route.requires_auth && !session.is_authenticated() {
        return Navigation::Redirect { to: login_redirect(&config.login_path, location) };
    }
    if route.guest_only && session.is_authenticated() {
        return Navigation::Redirect { to: config.home_path.clone() };
    }

    let title = route.title.map_or_else(|| config.default_title.clone(), str::to_owned);
    Navigation::Allow { title }
}

/// Rebuild `path?query` from router location parts. `search` may or may not
/// carry its leading `?`.
#[must_use]
pub fn full_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// Login location that returns to `location` afterwards.
///
/// Slashes stay literal (`/login?redirect=/profile`); everything else that
/// could break the query is percent-encoded.
#[must_use]
pub fn login_redirect(login_path: &str, location: &str) -> String {
    let encoded = urlencoding::encode(location).replace("%2F", "/");
    format!("{login_path}?{REDIRECT_PARAM}={encoded}")
}

/// Where to go after a successful login, given the already-decoded
/// `redirect` query value.
///
/// Only same-origin absolute paths are honored; anything else (missing,
/// external `//host`, another login page) lands on the home path.
#[must_use]
pub fn post_login_target(redirect: Option<&str>, config: &ClientConfig) -> String {
    let Some(target) = redirect.map(str::trim).filter(|t| !t.is_empty()) else {
        return config.home_path.clone();
    };
    let same_origin = target.starts_with('/') && !target.starts_with("//") && !target.starts_with("/\\");
    let lands_on_guest_page = match_route(target).is_some_and(|r| r.guest_only);
    if same_origin && !lands_on_guest_page { target.to_owned() } else { config.home_path.clone() }
}
