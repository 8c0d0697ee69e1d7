//! Stack of dismissible error notices raised by failed requests.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeState};

#[component]
pub fn NoticeList() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-list" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice notice--error">
                            <span class="notice__message">{notice.message}</span>
                            <button
                                class="notice__dismiss"
                                title="Dismiss"
                                on:click=move |_| notices.update(|s| s.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
