//! Durable key/value storage used for session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists through the `Storage` trait so browser
//! `localStorage` and the in-memory map used natively share one contract.
//! Writes are best effort: a full or disabled storage never fails a caller.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Synchronous string key/value storage.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-memory storage. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` currently holds a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Browser `window.localStorage`. Every call degrades to a no-op when
/// storage is unavailable (private mode, sandboxed iframe).
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn handle() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::handle()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::handle() {
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage write failed for key {key}");
            }
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::handle() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Storage backing the running app: `localStorage` in the browser, an
/// in-memory map elsewhere.
#[must_use]
pub fn app_storage() -> Rc<dyn Storage> {
    #[cfg(feature = "csr")]
    {
        Rc::new(BrowserStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(MemoryStorage::new())
    }
}

/// Outcome of reading a JSON value back from storage.
#[derive(Debug, PartialEq, Eq)]
pub enum Loaded<T> {
    Missing,
    Malformed,
    Value(T),
}

/// Load and decode a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Loaded<T> {
    let Some(raw) = storage.get_item(key) else {
        return Loaded::Missing;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Loaded::Value(value),
        Err(_) => Loaded::Malformed,
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    storage.set_item(key, &raw);
}
