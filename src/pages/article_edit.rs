//! Create and edit form for articles, with a live markdown preview.
//!
//! `/article/edit` starts an empty draft; `/article/edit/:id` loads the
//! stored article first. Ownership is enforced by the API.

#[cfg(test)]
#[path = "article_edit_test.rs"]
mod article_edit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::article::parse_article_id;
use crate::app::use_api;
use crate::net::types::ArticleDraft;
use crate::router::routes::{RouteName, route};
use crate::util::markdown::render_article_html;

const TITLE_MAX_CHARS: usize = 100;

fn validate_draft(title: &str, content: &str, category: &str, is_publish: bool) -> Result<ArticleDraft, &'static str> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > TITLE_MAX_CHARS {
        return Err("Enter a title of up to 100 characters.");
    }
    if content.trim().is_empty() {
        return Err("Write some content first.");
    }
    let Some(category_id) = category.trim().parse::<u64>().ok().filter(|id| *id != 0) else {
        return Err("Choose a category.");
    };
    Ok(ArticleDraft {
        title: title.to_owned(),
        content: content.to_owned(),
        category_id,
        cover_img: String::new(),
        is_publish,
    })
}

#[component]
pub fn ArticleEditPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let navigate = use_navigate();
    let article_id = Memo::new(move |_| params.read().get("id").as_deref().and_then(parse_article_id));

    let defaults = ArticleDraft::default();
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let category = RwSignal::new(defaults.category_id.to_string());
    let cover_img = RwSignal::new(String::new());
    let publish = RwSignal::new(defaults.is_publish);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let Some(id) = article_id.get() else {
            return;
        };
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            if let Ok(article) = api.article(id).await {
                let draft = ArticleDraft::from(&article);
                title.set(draft.title);
                content.set(draft.content);
                category.set(draft.category_id.to_string());
                cover_img.set(draft.cover_img);
                publish.set(draft.is_publish);
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let mut draft = match validate_draft(&title.get(), &content.get(), &category.get(), publish.get()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        draft.cover_img = cover_img.get().trim().to_owned();
        busy.set(true);
        info.set(String::new());

        let editing = article_id.get_untracked();
        let api = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let (result, target) = match editing {
                Some(id) => (api.update_article(id, &draft).await, format!("/article/{id}")),
                None => (api.create_article(&draft).await, route(RouteName::Home).path.to_owned()),
            };
            match result {
                Ok(()) => navigate(&target, NavigateOptions::default()),
                Err(_) => busy.set(false),
            }
        });
    };

    view! {
        <div class="editor-page">
            <h1>{move || if article_id.get().is_some() { "Edit article" } else { "New article" }}</h1>
            <form class="editor-form" on:submit=on_submit>
                <input
                    class="editor-input"
                    type="text"
                    placeholder="Title"
                    maxlength="100"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    class="editor-input"
                    type="number"
                    min="1"
                    placeholder="Category id"
                    prop:value=move || category.get()
                    on:input=move |ev| category.set(event_target_value(&ev))
                />
                <input
                    class="editor-input"
                    type="url"
                    placeholder="Cover image URL (optional)"
                    prop:value=move || cover_img.get()
                    on:input=move |ev| cover_img.set(event_target_value(&ev))
                />
                <label class="editor-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || publish.get()
                        on:change=move |ev| publish.set(event_target_checked(&ev))
                    />
                    "Publish"
                </label>
                <textarea
                    class="editor-content"
                    placeholder="Markdown content"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button class="editor-submit" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="editor-message">{move || info.get()}</p>
            </Show>
            <section class="editor-preview" inner_html=move || render_article_html(&content.get())></section>
        </div>
    }
}
