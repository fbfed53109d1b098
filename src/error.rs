//! Error type shared by the session store seam and the cache facade.

/// Failures surfaced by [`crate::SessionCache`] and [`crate::SessionStore`].
///
/// A missing or empty stored value is never an error; readers degrade to the
/// default record instead.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Stored text under `key` is not syntactically valid JSON.
    #[error("malformed cached value under {key:?}: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// Stored text under `key` is valid JSON but not an object fitting the record.
    #[error("cached value under {key:?} has unexpected shape: {source}")]
    Shape {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize cached value: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The backing store refused an operation (quota exceeded, security policy).
    #[error("session storage {op} failed: {message}")]
    Storage { op: &'static str, message: String },
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}
