//! Static route table.
//!
//! The view bound to each route lives in `app.rs`; this table carries the
//! metadata the navigation guard needs (title, auth requirements) and a
//! matcher that ranks static segments above `:param` segments, so
//! `/article/edit` never resolves to the article detail route.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Register,
    ArticleDetail,
    ArticleCreate,
    ArticleEdit,
    Profile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: RouteName,
    /// Document title; the configured default applies when `None`.
    pub title: Option<&'static str>,
    /// Unauthenticated visitors are sent to the login route.
    pub requires_auth: bool,
    /// Authenticated visitors are sent home (login, register).
    pub guest_only: bool,
}

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: "/", name: RouteName::Home, title: Some("Home - Blog"), requires_auth: false, guest_only: false },
    RouteDescriptor { path: "/login", name: RouteName::Login, title: Some("Sign in - Blog"), requires_auth: false, guest_only: true },
    RouteDescriptor {
        path: "/register",
        name: RouteName::Register,
        title: Some("Register - Blog"),
        requires_auth: false,
        guest_only: true,
    },
    RouteDescriptor {
        path: "/article/:id",
        name: RouteName::ArticleDetail,
        title: Some("Article - Blog"),
        requires_auth: false,
        guest_only: false,
    },
    RouteDescriptor {
        path: "/article/edit",
        name: RouteName::ArticleCreate,
        title: Some("Write - Blog"),
        requires_auth: true,
        guest_only: false,
    },
    RouteDescriptor {
        path: "/article/edit/:id",
        name: RouteName::ArticleEdit,
        title: Some("Edit - Blog"),
        requires_auth: true,
        guest_only: false,
    },
    RouteDescriptor { path: "/profile", name: RouteName::Profile, title: Some("Profile - Blog"), requires_auth: true, guest_only: false },
];

/// Descriptor registered under `name`.
#[must_use]
pub fn route(name: RouteName) -> &'static RouteDescriptor {
    ROUTES
        .iter()
        .find(|r| r.name == name)
        .unwrap_or(&ROUTES[0])
}

/// Strip any `?query` or `#fragment` from a location.
#[must_use]
pub fn path_only(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Number of static segments when `pattern` matches `path`.
fn match_score(pattern: &str, path: &str) -> Option<usize> {
    let mut score = 0;
    let mut want = segments(pattern);
    let mut got = segments(path);
    loop {
        match (want.next(), got.next()) {
            (None, None) => return Some(score),
            (Some(w), Some(_)) if w.starts_with(':') => {}
            (Some(w), Some(g)) if w == g => score += 1,
            _ => return None,
        }
    }
}

/// Resolve a location (query and fragment ignored) to its route. `None`
/// means the catch-all applies.
#[must_use]
pub fn match_route(location: &str) -> Option<&'static RouteDescriptor> {
    let path = path_only(location);
    ROUTES
        .iter()
        .filter_map(|r| match_score(r.path, path).map(|score| (score, r)))
        .max_by_key(|(score, _)| *score)
        .map(|(_, r)| r)
}
