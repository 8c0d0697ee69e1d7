//! Article detail page with owner actions.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::use_api;
use crate::net::types::Article;
use crate::router::routes::{RouteName, route};
use crate::state::auth::AuthState;
use crate::util::markdown::render_article_html;

/// Route `:id` segment as an article id. Zero is never a stored id.
pub(crate) fn parse_article_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|id| *id != 0)
}

/// Only the author may edit or delete.
fn can_manage(owner_id: u64, auth: &AuthState) -> bool {
    auth.user().is_some_and(|user| user.id != 0 && user.id == owner_id)
}

/// `2024-05-01T10:00:00+08:00` as `2024-05-01`.
fn display_date(timestamp: Option<&str>) -> String {
    timestamp.map(|t| t.chars().take(10).collect()).unwrap_or_default()
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let article_id = Memo::new(move |_| params.read().get("id").as_deref().and_then(parse_article_id));

    let article = LocalResource::new(move || {
        let id = article_id.get();
        let api = api.get_value();
        async move {
            match id {
                Some(id) => api.article(id).await.ok(),
                None => None,
            }
        }
    });

    view! {
        <div class="article-page">
            <Suspense fallback=|| view! { <p class="page-status">"Loading article..."</p> }>
                {move || {
                    article
                        .get()
                        .map(|loaded| match loaded {
                            Some(article) => view! { <ArticleView article=article/> }.into_any(),
                            None => view! { <p class="page-status">"Article not found."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ArticleView(article: Article) -> impl IntoView {
    let api = use_api();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);
    let confirming = RwSignal::new(false);

    let id = article.id;
    let owner_id = article.user_id;
    let author = article.user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
    let published = display_date(article.created_at.as_deref());
    let html = render_article_html(&article.content);
    let edit_href = format!("{}/{id}", route(RouteName::ArticleCreate).path);

    let on_delete = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        busy.set(true);
        let api = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.delete_article(id).await {
                Ok(()) => {
                    leptos::logging::log!("deleted article {id}");
                    navigate(route(RouteName::Home).path, NavigateOptions::default());
                }
                Err(_) => {
                    busy.set(false);
                    confirming.set(false);
                }
            }
        });
    });

    view! {
        <article class="article">
            <h1 class="article__title">{article.title}</h1>
            <p class="article__meta">
                <span>{author}</span>
                <span>{published}</span>
                <span>{format!("{} views", article.view_count)}</span>
            </p>
            <Show when=move || auth.with(|a| can_manage(owner_id, a))>
                <div class="article__actions">
                    <A href=edit_href.clone()>"Edit"</A>
                    <Show
                        when=move || confirming.get()
                        fallback=move || {
                            view! { <button on:click=move |_| confirming.set(true)>"Delete"</button> }
                        }
                    >
                        <span>"Delete this article?"</span>
                        <button disabled=move || busy.get() on:click=move |_| on_delete.run(())>
                            "Confirm"
                        </button>
                        <button on:click=move |_| confirming.set(false)>"Cancel"</button>
                    </Show>
                </div>
            </Show>
            <div class="article__body" inner_html=html></div>
        </article>
    }
}
