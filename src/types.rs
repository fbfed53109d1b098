//! Records persisted by the session cache.
//!
//! DESIGN
//! ======
//! `body` carries whatever JSON the test-case runner produced. Schema
//! enforcement belongs to the producer and consumer, so it stays an open
//! `serde_json::Value` here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Cached result of executing a test case.
///
/// The `Default` value stands for the empty record `{}` returned when nothing
/// is cached for an id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCaseResponse {
    /// Textual runner output.
    #[serde(default)]
    pub output: String,
    /// Open-ended structured response body.
    #[serde(default)]
    pub body: serde_json::Value,
}

impl TestCaseResponse {
    pub fn new(output: impl Into<String>, body: serde_json::Value) -> Self {
        Self { output: output.into(), body }
    }

    /// True for the empty record: no output and a null body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty() && self.body.is_null()
    }
}

/// Most recently viewed suite/test-case pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastTestCaseLocation {
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub testcase: String,
}

impl LastTestCaseLocation {
    pub fn new(suite: impl Into<String>, testcase: impl Into<String>) -> Self {
        Self { suite: suite.into(), testcase: testcase.into() }
    }
}
