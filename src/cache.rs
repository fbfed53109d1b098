//! Session-scoped cache facade for the API-testing UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The test-case view caches the last execution response per case id and
//! remembers which suite/case was open, so a reload of the tab can restore
//! both. Values are JSON text in a [`SessionStore`].
//!
//! TRADE-OFFS
//! ==========
//! A missing key and a key holding empty text both read back as the default
//! record. Text that is not JSON is returned as [`CacheError::Parse`];
//! JSON that is not an object fitting the record is [`CacheError::Shape`].
//! Neither is masked, so corrupted state is visible to the caller. Fields
//! missing from a stored object fall back to their defaults.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::store::SessionStore;
use crate::types::{LastTestCaseLocation, TestCaseResponse};

/// Typed reads and writes over a session store.
#[derive(Debug)]
pub struct SessionCache<S> {
    store: S,
    config: CacheConfig,
}

impl<S: SessionStore> SessionCache<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, CacheConfig::default())
    }

    pub fn with_config(store: S, config: CacheConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Cached response for `id`, or the empty record when nothing is stored.
    pub fn cached_response(&self, id: &str) -> Result<TestCaseResponse, CacheError> {
        Ok(self.read_json(id)?.unwrap_or_default())
    }

    /// Store `resp` under `id`, replacing any previous response.
    pub fn set_cached_response(&self, id: &str, resp: &TestCaseResponse) -> Result<(), CacheError> {
        self.write_json(id, resp)
    }

    pub fn clear_cached_response(&self, id: &str) -> Result<(), CacheError> {
        self.remove(id)
    }

    /// Last visited suite/case pair, `None` before the first write.
    pub fn last_location(&self) -> Result<Option<LastTestCaseLocation>, CacheError> {
        self.read_json(&self.config.location_key)
    }

    /// Remember `suite`/`testcase` as the last visited location. Empty
    /// strings are stored as given.
    pub fn set_last_location(&self, suite: &str, testcase: &str) -> Result<(), CacheError> {
        let location = LastTestCaseLocation::new(suite, testcase);
        self.write_json(&self.config.location_key, &location)
    }

    pub fn clear_last_location(&self) -> Result<(), CacheError> {
        self.remove(&self.config.location_key)
    }

    /// Drop every cached entry in the underlying session store.
    pub fn clear_all(&self) -> Result<(), CacheError> {
        self.store.clear()?;
        debug!("cleared session store");
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let raw = match self.store.get_item(key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                trace!(key, "session cache miss");
                return Ok(None);
            }
        };
        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|source| CacheError::Parse { key: key.to_owned(), source })?;
        if !value.is_object() {
            let source: serde_json::Error =
                serde::de::Error::custom(format!("expected a JSON object, found {}", json_kind(&value)));
            return Err(CacheError::Shape { key: key.to_owned(), source });
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| CacheError::Shape { key: key.to_owned(), source })
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        if let Err(e) = self.store.set_item(key, &raw) {
            warn!(key, error = %e, "session store rejected write");
            return Err(e);
        }
        debug!(key, bytes = raw.len(), "cached value in session store");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.store.remove_item(key)?;
        debug!(key, "removed cached value");
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
impl SessionCache<crate::store::BrowserSessionStore> {
    /// Cache backed by the current tab's `window.sessionStorage`.
    pub fn browser() -> Result<Self, CacheError> {
        Self::browser_with_config(CacheConfig::default())
    }

    pub fn browser_with_config(config: CacheConfig) -> Result<Self, CacheError> {
        let store = crate::store::BrowserSessionStore::from_window()?;
        Ok(Self::with_config(store, config))
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
