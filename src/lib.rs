//! Session-scoped cache helpers for the API-testing console UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console keeps two pieces of per-tab state across reloads: the last
//! execution response of each test case and the suite/case that was open.
//! Both live in browser session storage as JSON text. With the `hydrate`
//! feature, [`SessionCache::browser`] binds to `window.sessionStorage`;
//! otherwise callers supply a [`SessionStore`] such as [`MemoryStore`].

pub mod cache;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use cache::SessionCache;
pub use config::{CacheConfig, DEFAULT_LOCATION_KEY};
pub use error::CacheError;
#[cfg(feature = "hydrate")]
pub use store::BrowserSessionStore;
pub use store::{MemoryStore, SessionStore};
pub use types::{LastTestCaseLocation, TestCaseResponse};
