//! Test doubles for the token list source
//!
//! A deterministic in-memory [`TokenListSource`] that records every fetched
//! URL and serves canned documents. URLs with no configured document fail,
//! which is how tests simulate an unreachable or unparsable source.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::TokenRegistryError;
use crate::source::TokenListSource;
use crate::types::TokenList;

/// Mock source that records calls and allows controlled responses.
/// Clones share state, so a clone kept outside the provider can observe
/// the calls made through the moved original.
#[derive(Debug, Clone, Default)]
pub struct MockTokenListSource {
    responses: Arc<Mutex<HashMap<String, TokenList>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTokenListSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to serve a document for a given URL
    pub fn with_list(self, url: &str, list: TokenList) -> Self {
        self.responses.lock().unwrap().insert(url.to_string(), list);
        self
    }

    /// Builder method to serve a JSON document for a given URL.
    /// Panics on malformed fixture JSON; this is a test helper.
    pub fn with_json(self, url: &str, json: &str) -> Self {
        let list: TokenList = serde_json::from_str(json)
            .unwrap_or_else(|e| panic!("invalid fixture JSON for {}: {}", url, e));
        self.with_list(url, list)
    }

    /// Builder method to delay the response for a given URL, so tests can
    /// make completion order differ from configured source order
    pub fn with_delay(self, url: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(url.to_string(), delay);
        self
    }

    /// All fetched URLs, in call order
    pub fn fetched_urls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of times a given URL was fetched
    pub fn fetch_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

#[async_trait]
impl TokenListSource for MockTokenListSource {
    async fn fetch_list(&self, url: &str) -> Result<TokenList, TokenRegistryError> {
        self.calls.lock().unwrap().push(url.to_string());

        let delay = self.delays.lock().unwrap().get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = self.responses.lock().unwrap().get(url).cloned();
        response.ok_or_else(|| {
            TokenRegistryError::Parse(format!("No response configured for {}", url))
        })
    }
}
