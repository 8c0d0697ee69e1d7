use super::*;

#[test]
fn route_table_covers_every_name_once() {
    let names = [
        RouteName::Home,
        RouteName::Login,
        RouteName::Register,
        RouteName::ArticleDetail,
        RouteName::ArticleCreate,
        RouteName::ArticleEdit,
        RouteName::Profile,
    ];
    for name in names {
        assert_eq!(ROUTES.iter().filter(|r| r.name == name).count(), 1, "{name:?}");
        assert_eq!(route(name).name, name);
    }
}

#[test]
fn auth_flags_match_route_surface() {
    let requires: Vec<&str> = ROUTES.iter().filter(|r| r.requires_auth).map(|r| r.path).collect();
    assert_eq!(requires, vec!["/article/edit", "/article/edit/:id", "/profile"]);

    let guests: Vec<&str> = ROUTES.iter().filter(|r| r.guest_only).map(|r| r.path).collect();
    assert_eq!(guests, vec!["/login", "/register"]);
}

#[test]
fn match_static_paths() {
    assert_eq!(match_route("/").map(|r| r.name), Some(RouteName::Home));
    assert_eq!(match_route("/login").map(|r| r.name), Some(RouteName::Login));
    assert_eq!(match_route("/profile/").map(|r| r.name), Some(RouteName::Profile));
}

#[test]
fn static_segment_beats_param() {
    assert_eq!(match_route("/article/edit").map(|r| r.name), Some(RouteName::ArticleCreate));
    assert_eq!(match_route("/article/17").map(|r| r.name), Some(RouteName::ArticleDetail));
    assert_eq!(match_route("/article/edit/17").map(|r| r.name), Some(RouteName::ArticleEdit));
}

#[test]
fn match_ignores_query_and_fragment() {
    assert_eq!(match_route("/login?redirect=/profile").map(|r| r.name), Some(RouteName::Login));
    assert_eq!(match_route("/article/3#comments").map(|r| r.name), Some(RouteName::ArticleDetail));
}

#[test]
fn unknown_paths_fall_through() {
    assert!(match_route("/nope").is_none());
    assert!(match_route("/article").is_none());
    assert!(match_route("/article/1/extra/segments").is_none());
}
