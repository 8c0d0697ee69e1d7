//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Builds the one `SessionStore` and one `ApiClient` for the page and hands
//! them to every view through context. The API client holds `Rc` state, so it
//! is provided as a local `StoredValue` handle; the reactive `AuthState`
//! mirror is kept in sync through a session subscription.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{guarded::Guarded, nav_bar::NavBar, notice_list::NoticeList};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::notify::{LocationNavigator, NoticeNotifier};
use crate::net::pipeline::RequestPipeline;
use crate::net::transport::app_transport;
use crate::pages::{
    article::ArticlePage,
    article_edit::ArticleEditPage,
    home::HomePage,
    login::{LoginPage, RegisterPage},
    profile::ProfilePage,
};
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionStore;
use crate::util::storage::app_storage;

/// Context handle for the page-wide API client.
pub type ApiHandle = StoredValue<ApiClient, LocalStorage>;

/// The API client provided by [`App`].
#[must_use]
pub fn use_api() -> ApiHandle {
    expect_context::<ApiHandle>()
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let session = SessionStore::load(app_storage());

    let auth = RwSignal::new(AuthState::from_session(&session.snapshot()));
    session.subscribe(move |s| auth.set(AuthState::from_session(s)));
    let notices = RwSignal::new(NoticeState::default());

    let pipeline = RequestPipeline::new(
        config.clone(),
        session,
        app_transport(&config),
        Rc::new(NoticeNotifier::new(notices)),
        Rc::new(LocationNavigator),
    );
    let api: ApiHandle = StoredValue::new_local(ApiClient::new(pipeline));

    provide_context(config.clone());
    provide_context(api);
    provide_context(auth);
    provide_context(notices);

    let home_path = config.home_path;

    view! {
        <Router>
            <NavBar/>
            <NoticeList/>
            <main class="blog-main">
                <Routes fallback=move || view! { <Redirect path=home_path.clone()/> }>
                    <Route path=StaticSegment("") view=|| view! { <Guarded><HomePage/></Guarded> }/>
                    <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                    <Route path=StaticSegment("register") view=|| view! { <Guarded><RegisterPage/></Guarded> }/>
                    <Route
                        path=(StaticSegment("article"), StaticSegment("edit"))
                        view=|| view! { <Guarded><ArticleEditPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("article"), StaticSegment("edit"), ParamSegment("id"))
                        view=|| view! { <Guarded><ArticleEditPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("article"), ParamSegment("id"))
                        view=|| view! { <Guarded><ArticlePage/></Guarded> }
                    />
                    <Route path=StaticSegment("profile") view=|| view! { <Guarded><ProfilePage/></Guarded> }/>
                </Routes>
            </main>
        </Router>
    }
}
