//! User-facing side effects of the request pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pipeline reports failures through a `Notifier` (error toast plus a
//! blocking confirmation) and leaves the app through a `Navigator`. The app
//! wires the notice list signal and `window.location`; tests record calls.

use leptos::prelude::{RwSignal, Update};

use crate::state::notice::NoticeState;

pub trait Notifier {
    /// Surface a non-blocking error message.
    fn error(&self, message: &str);
    /// Ask the user a yes/no question; `true` when accepted.
    fn confirm(&self, message: &str) -> bool;
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Pushes errors into the shared notice list and confirms via
/// `window.confirm`.
#[derive(Clone, Copy, Debug)]
pub struct NoticeNotifier {
    notices: RwSignal<NoticeState>,
}

impl NoticeNotifier {
    #[must_use]
    pub fn new(notices: RwSignal<NoticeState>) -> Self {
        Self { notices }
    }
}

impl Notifier for NoticeNotifier {
    fn error(&self, message: &str) {
        self.notices.update(|s| {
            s.push_error(message);
        });
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            false
        }
    }
}

/// Full page navigation through `window.location`, which also drops any
/// in-memory state of the signed-out session.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}
