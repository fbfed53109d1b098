//! Session-scoped text key-value stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cache facade never talks to `web-sys` directly. Browser builds
//! (`hydrate`) bind to `window.sessionStorage`; SSR and native builds use the
//! in-process [`MemoryStore`], which also stands in for the browser in tests.
//!
//! TRADE-OFFS
//! ==========
//! Stores take `&self` and rely on interior mutability. Session storage is
//! driven from a single UI thread, so `MemoryStore` uses a `RefCell` rather
//! than a lock.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::CacheError;

/// Text key-value store whose contents live for one browsing session.
pub trait SessionStore {
    /// Read the raw text stored under `key`, `None` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError>;

    fn remove_item(&self, key: &str) -> Result<(), CacheError>;

    /// Drop every key, as happens when the session ends.
    fn clear(&self) -> Result<(), CacheError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        (**self).remove_item(key)
    }

    fn clear(&self) -> Result<(), CacheError> {
        (**self).clear()
    }
}

/// In-process session store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}

/// `window.sessionStorage` of the current tab.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct BrowserSessionStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl BrowserSessionStore {
    /// Bind to the current window's session storage.
    pub fn from_window() -> Result<Self, CacheError> {
        let window = web_sys::window().ok_or_else(|| CacheError::Unavailable("no window".into()))?;
        let storage = window
            .session_storage()
            .map_err(|e| CacheError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| CacheError::Unavailable("sessionStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
fn js_failure(op: &'static str, err: &wasm_bindgen::JsValue) -> CacheError {
    CacheError::Storage { op, message: format!("{err:?}") }
}

#[cfg(feature = "hydrate")]
impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.storage.get_item(key).map_err(|e| js_failure("read", &e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.storage.set_item(key, value).map_err(|e| js_failure("write", &e))
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        self.storage.remove_item(key).map_err(|e| js_failure("remove", &e))
    }

    fn clear(&self) -> Result<(), CacheError> {
        self.storage.clear().map_err(|e| js_failure("clear", &e))
    }
}
