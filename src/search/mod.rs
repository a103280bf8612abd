//! Web search capability
//!
//! Free-text query in, free-text results out. The only implementation is an
//! anonymous DuckDuckGo client; tests plug in their own providers.

use async_trait::async_trait;
use thiserror::Error;

mod duckduckgo;

pub use duckduckgo::{DuckDuckGoClient, NO_RESULTS, extract_snippets};

/// Errors raised by a search provider
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Search returned HTTP {status}")]
    Status { status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A text search capability
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run one query and return the raw result text
    async fn search(&self, query: &str) -> Result<String, SearchError>;
}
