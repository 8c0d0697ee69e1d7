//! Article list with keyword search and pagination.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_api;
use crate::net::types::{Article, ArticleQuery, DEFAULT_PAGE};
use crate::util::markdown::excerpt;

const EXCERPT_CHARS: usize = 140;

/// First page of results for `keyword`; blank means no filter.
fn search_query(current: &ArticleQuery, keyword: &str) -> ArticleQuery {
    let keyword = keyword.trim();
    ArticleQuery {
        page: DEFAULT_PAGE,
        keyword: (!keyword.is_empty()).then(|| keyword.to_owned()),
        ..current.clone()
    }
}

/// `current` moved to `page`, clamped to the first page.
fn page_query(current: &ArticleQuery, page: u32) -> ArticleQuery {
    ArticleQuery { page: page.max(DEFAULT_PAGE), ..current.clone() }
}

fn author_name(article: &Article) -> String {
    article
        .user
        .as_ref()
        .map(|u| u.username.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "anonymous".to_owned())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let query = RwSignal::new(ArticleQuery::default());
    let keyword = RwSignal::new(String::new());

    let articles = LocalResource::new(move || {
        let query = query.get();
        let api = api.get_value();
        async move { api.list_articles(&query).await.ok() }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        query.update(|q| *q = search_query(q, &keyword.get_untracked()));
    };

    view! {
        <div class="home-page">
            <form class="search-bar" on:submit=on_search>
                <input
                    class="search-bar__input"
                    type="search"
                    placeholder="Search articles"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <button class="search-bar__button" type="submit">"Search"</button>
            </form>
            <Suspense fallback=|| view! { <p class="page-status">"Loading articles..."</p> }>
                {move || {
                    articles
                        .get()
                        .map(|loaded| match loaded {
                            None => view! { <p class="page-status">"Articles are unavailable right now."</p> }.into_any(),
                            Some(page) if page.list.is_empty() => {
                                view! { <p class="page-status">"No articles yet."</p> }.into_any()
                            }
                            Some(page) => {
                                let current = page.page;
                                let has_next = page.has_next();
                                let page_count = page.page_count();
                                view! {
                                    <ul class="article-list">
                                        {page.list.into_iter().map(|article| view! { <ArticleCard article=article/> }).collect_view()}
                                    </ul>
                                    <nav class="pager">
                                        <button
                                            class="pager__prev"
                                            disabled=current <= DEFAULT_PAGE
                                            on:click=move |_| query.update(|q| *q = page_query(q, current.saturating_sub(1)))
                                        >
                                            "Previous"
                                        </button>
                                        <span class="pager__status">{format!("Page {current} of {page_count}")}</span>
                                        <button
                                            class="pager__next"
                                            disabled=!has_next
                                            on:click=move |_| query.update(|q| *q = page_query(q, current.saturating_add(1)))
                                        >
                                            "Next"
                                        </button>
                                    </nav>
                                }
                                .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ArticleCard(article: Article) -> impl IntoView {
    let href = format!("/article/{}", article.id);
    let author = author_name(&article);
    let summary = excerpt(&article.content, EXCERPT_CHARS);
    let category = article.category.as_ref().map(|c| c.name.clone()).unwrap_or_default();

    view! {
        <li class="article-card">
            <A href=href>
                <h2 class="article-card__title">{article.title}</h2>
            </A>
            <p class="article-card__meta">
                <span>{author}</span>
                {(!category.is_empty()).then(|| view! { <span class="article-card__category">{category}</span> })}
                <span>{format!("{} views", article.view_count)}</span>
            </p>
            <p class="article-card__excerpt">{summary}</p>
        </li>
    }
}
