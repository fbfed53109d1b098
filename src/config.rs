//! Cache configuration.
//!
//! The well-known location key lives here so callers never repeat the
//! literal.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Key under which the last visited test case location is stored.
pub const DEFAULT_LOCATION_KEY: &str = "api-testing-case-location";

/// Env var overriding [`DEFAULT_LOCATION_KEY`].
pub const LOCATION_KEY_ENV: &str = "ATEST_CASE_LOCATION_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub location_key: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { location_key: DEFAULT_LOCATION_KEY.to_owned() }
    }
}

impl CacheConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `ATEST_CASE_LOCATION_KEY`: default `api-testing-case-location`;
    ///   blank values are ignored
    #[must_use]
    pub fn from_env() -> Self {
        let location_key = parse_location_key(std::env::var(LOCATION_KEY_ENV).ok().as_deref());
        Self { location_key }
    }

    #[must_use]
    pub fn with_location_key(mut self, key: impl Into<String>) -> Self {
        self.location_key = key.into();
        self
    }
}

fn parse_location_key(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_LOCATION_KEY)
        .to_owned()
}
