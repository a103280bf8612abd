//! Language model report

use serde::Serialize;
use std::fmt;

/// Markdown report returned by the language model.
///
/// Opaque: nothing checks that the cost and itinerary sections are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TripReport(String);

impl TripReport {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    pub fn as_markdown(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
