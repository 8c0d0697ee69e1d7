//! Session store: the bearer token and user profile of the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created at startup and handed to the request
//! pipeline and the navigation guard. The pipeline reads the token for every
//! request and clears it on a 401; login and logout replace it wholesale.
//! Every mutation is mirrored to durable storage (`token`, `userInfo`) so the
//! session survives a reload.
//!
//! DESIGN
//! ======
//! The handle is `Rc<RefCell<..>>`: the browser runs on one thread and every
//! mutation completes inside a single synchronous call, so readers never see
//! a half-written session. Observers are invoked after the borrow is released
//! so they may read the store again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::net::types::UserInfo;
use crate::util::storage::{self, Loaded, Storage};

/// Storage key holding the raw token string.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded [`UserInfo`].
pub const USER_INFO_KEY: &str = "userInfo";

/// Snapshot of the authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token; empty when signed out.
    pub token: String,
    pub user_info: UserInfo,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Read a session back from durable storage.
    ///
    /// A missing or malformed profile falls back to the default profile; a
    /// missing token means signed out. Never fails.
    pub fn restore(storage: &dyn Storage) -> Self {
        let token = storage.get_item(TOKEN_KEY).unwrap_or_default();
        let user_info = match storage::load_json::<UserInfo>(storage, USER_INFO_KEY) {
            Loaded::Value(info) => info,
            Loaded::Missing => UserInfo::default(),
            Loaded::Malformed => {
                leptos::logging::warn!("discarding malformed {USER_INFO_KEY} in storage");
                UserInfo::default()
            }
        };
        Self { token, user_info }
    }
}

type Listener = Rc<dyn Fn(&Session)>;

struct Inner {
    session: Session,
    storage: Rc<dyn Storage>,
    listeners: Vec<Listener>,
}

/// Shared handle to the session. Clones refer to the same session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("session", &self.inner.borrow().session).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create the store from whatever `storage` holds at startup.
    pub fn load(storage: Rc<dyn Storage>) -> Self {
        let session = Session::restore(storage.as_ref());
        Self { inner: Rc::new(RefCell::new(Inner { session, storage, listeners: Vec::new() })) }
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner.borrow().session.clone()
    }

    #[must_use]
    pub fn token(&self) -> String {
        self.inner.borrow().session.token.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().session.is_authenticated()
    }

    /// Replace the session after a successful login and persist it.
    pub fn set_user(&self, token: impl Into<String>, user_info: UserInfo) {
        let token = token.into();
        self.mutate(|inner| {
            inner.storage.set_item(TOKEN_KEY, &token);
            storage::save_json(inner.storage.as_ref(), USER_INFO_KEY, &user_info);
            inner.session = Session { token, user_info };
        });
    }

    /// Reset to the signed-out default and drop the persisted copies.
    ///
    /// Safe to call repeatedly.
    pub fn clear_user(&self) {
        self.mutate(|inner| {
            inner.storage.remove_item(TOKEN_KEY);
            inner.storage.remove_item(USER_INFO_KEY);
            inner.session = Session::default();
        });
    }

    /// Replace only the profile (e.g. after `GET /user/info`). Ignored while
    /// signed out so a late response cannot resurrect a cleared session.
    pub fn update_profile(&self, user_info: UserInfo) {
        if !self.is_authenticated() {
            return;
        }
        self.mutate(|inner| {
            storage::save_json(inner.storage.as_ref(), USER_INFO_KEY, &user_info);
            inner.session.user_info = user_info;
        });
    }

    /// Register an observer called with the new session after each mutation.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    fn mutate(&self, apply: impl FnOnce(&mut Inner)) {
        let (session, listeners) = {
            let mut inner = self.inner.borrow_mut();
            apply(&mut inner);
            (inner.session.clone(), inner.listeners.clone())
        };
        for listener in listeners {
            listener(&session);
        }
    }
}
